use std::time::Duration;

use nature_core::Plant;
use nature_logging::nature_trace;

/// Lookup capability the coordinator depends on.
///
/// The coordinator cancels a search by dropping its future, so implementations
/// must not rely on running to completion and must not keep a handle back to
/// the coordinator.
#[async_trait::async_trait]
pub trait PlantRepository: Send + Sync {
    async fn search_for_plant(&self, name: &str) -> Option<Plant>;
}

/// In-memory plant catalog with an optional artificial delay per lookup.
#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    plants: Vec<Plant>,
    latency: Option<Duration>,
}

impl CatalogRepository {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self {
            plants,
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = (!latency.is_zero()).then_some(latency);
        self
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    fn find(&self, name: &str) -> Option<&Plant> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return None;
        }
        self.plants
            .iter()
            .find(|plant| plant.name.eq_ignore_ascii_case(wanted))
    }
}

#[async_trait::async_trait]
impl PlantRepository for CatalogRepository {
    async fn search_for_plant(&self, name: &str) -> Option<Plant> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let found = self.find(name).cloned();
        nature_trace!("catalog lookup name={:?} hit={}", name, found.is_some());
        found
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{CatalogRepository, PlantRepository};
    use nature_core::Plant;

    fn catalog() -> CatalogRepository {
        CatalogRepository::new(vec![
            Plant::new(1, "Rose", 40, "u"),
            Plant::new(2, "Tulip", 25, "t"),
        ])
    }

    #[tokio::test]
    async fn lookup_ignores_case_and_surrounding_whitespace() {
        let found = catalog().search_for_plant("  rOSE ").await;
        assert_eq!(found.map(|plant| plant.name), Some("Rose".to_string()));
    }

    #[tokio::test]
    async fn unknown_or_blank_name_yields_nothing() {
        assert!(catalog().search_for_plant("Fern").await.is_none());
        assert!(catalog().search_for_plant("   ").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn latency_delays_the_answer() {
        let repo = catalog().with_latency(Duration::from_secs(3));
        let started = tokio::time::Instant::now();
        let found = repo.search_for_plant("Tulip").await;
        assert!(found.is_some());
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[test]
    fn zero_latency_is_treated_as_none() {
        let repo = catalog().with_latency(Duration::ZERO);
        assert_eq!(repo.len(), 2);
        assert!(!repo.is_empty());
        assert!(repo.latency.is_none());
    }
}
