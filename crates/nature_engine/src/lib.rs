//! Nature engine: the async coordinator and the repository port it drives.
mod coordinator;
mod repository;
mod types;

pub use coordinator::NatureCoordinator;
pub use repository::{CatalogRepository, PlantRepository};
pub use types::{CoordinatorSettings, EngineError};
