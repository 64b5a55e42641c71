//! JSON-file-backed itinerary store.

use crate::paths::WayfarerPaths;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use wayfarer_core::error::Result;
use wayfarer_core::itinerary::{ItineraryStore, SavedItinerary};

/// Itinerary store persisting the whole list as one JSON file.
pub struct JsonFileItineraryStore {
    path: PathBuf,
}

impl JsonFileItineraryStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the default location
    /// (`~/.config/wayfarer/itineraries.json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// created.
    pub fn default_location() -> Result<Self> {
        WayfarerPaths::ensure_config_dir()?;
        Ok(Self::new(WayfarerPaths::itineraries_file()?))
    }
}

#[async_trait]
impl ItineraryStore for JsonFileItineraryStore {
    async fn load_all(&self) -> Result<Vec<SavedItinerary>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    async fn save_all(&self, itineraries: &[SavedItinerary]) -> Result<()> {
        let raw = serde_json::to_string_pretty(itineraries)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
