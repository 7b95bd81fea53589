use crate::NatureResult;

/// Result envelope of a single event-handling attempt.
///
/// Outcomes are consumed immediately by the reducers and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E> {
    Loading,
    Content(T),
    Error(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Outcome::Loading)
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            Outcome::Content(content) => Some(content),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Outcome shape used by the nature screen: both arms carry a [`NatureResult`].
pub type NatureOutcome = Outcome<NatureResult, NatureResult>;
