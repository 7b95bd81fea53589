//! RON configuration for the console app.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nature_core::Plant;
use nature_engine::{CatalogRepository, CoordinatorSettings};
use serde::Deserialize;
use thiserror::Error;

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILE: &str = "nature.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlantEntry {
    pub id: u64,
    pub name: String,
    pub max_height: u32,
    pub image_url: String,
}

impl From<PlantEntry> for Plant {
    fn from(entry: PlantEntry) -> Self {
        Plant::new(entry.id, entry.name, entry.max_height, entry.image_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_destination: LogDestination,
    pub log_level: String,
    /// Artificial delay per catalog lookup, so searches can be superseded by hand.
    pub search_latency_ms: u64,
    pub coordinator: CoordinatorSettings,
    pub plants: Vec<PlantEntry>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
            search_latency_ms: 300,
            coordinator: CoordinatorSettings::default(),
            plants: sample_plants(),
        }
    }
}

impl AppConfig {
    pub fn catalog(&self) -> CatalogRepository {
        let plants = self.plants.iter().cloned().map(Plant::from).collect();
        CatalogRepository::new(plants).with_latency(Duration::from_millis(self.search_latency_ms))
    }
}

/// Reads the config at `path`; `Ok(None)` when the file does not exist.
pub fn load_config(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn sample_plants() -> Vec<PlantEntry> {
    [
        (1, "Rose", 40, "https://images.example.com/rose.jpg"),
        (2, "Tulip", 25, "https://images.example.com/tulip.jpg"),
        (3, "Sunflower", 300, "https://images.example.com/sunflower.jpg"),
        (4, "Lavender", 60, "https://images.example.com/lavender.jpg"),
    ]
    .into_iter()
    .map(|(id, name, max_height, image_url)| PlantEntry {
        id,
        name: name.to_string(),
        max_height,
        image_url: image_url.to_string(),
    })
    .collect()
}
