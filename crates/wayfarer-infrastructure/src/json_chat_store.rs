//! JSON-file-backed chat state store.

use crate::paths::WayfarerPaths;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use wayfarer_core::chat::{ChatStateStore, ItineraryChats};
use wayfarer_core::error::Result;

/// Chat state store persisting the whole collection as one JSON file.
///
/// An absent file reads as an empty collection; an unreadable or
/// unparseable file is returned as an error for the session manager to
/// degrade on.
pub struct JsonFileChatStateStore {
    path: PathBuf,
}

impl JsonFileChatStateStore {
    /// Creates a store over the given file path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a store at the default location
    /// (`~/.config/wayfarer/chats.json`), creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// created.
    pub fn default_location() -> Result<Self> {
        WayfarerPaths::ensure_config_dir()?;
        Ok(Self::new(WayfarerPaths::chats_file()?))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ChatStateStore for JsonFileChatStateStore {
    async fn load_all(&self) -> Result<Vec<ItineraryChats>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let all = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), "loaded chat state record");
        Ok(all)
    }

    async fn save_all(&self, all: &[ItineraryChats]) -> Result<()> {
        let raw = serde_json::to_string_pretty(all)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, raw).await?;
        tracing::debug!(
            path = %self.path.display(),
            itineraries = all.len(),
            "wrote chat state record"
        );
        Ok(())
    }
}
