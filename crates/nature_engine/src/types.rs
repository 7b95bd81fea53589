use serde::Deserialize;
use thiserror::Error;

/// Tunables for a [`crate::NatureCoordinator`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoordinatorSettings {
    /// Buffered effects per subscriber before a slow one starts lagging.
    pub effect_capacity: usize,
    /// Skip publishing a state snapshot equal to the current one.
    pub suppress_redundant_states: bool,
    /// Report a toast when a search finds nothing.
    pub toast_on_empty_search: bool,
}

impl Default for CoordinatorSettings {
    fn default() -> Self {
        Self {
            effect_capacity: 16,
            suppress_redundant_states: false,
            toast_on_empty_search: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("coordinator is torn down")]
    Closed,
}
