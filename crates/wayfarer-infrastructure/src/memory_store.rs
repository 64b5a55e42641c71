//! In-memory (tab-scoped) storage adapters.
//!
//! These adapters keep the whole persisted record as one serialized JSON
//! string behind a mutex, matching the semantics of browser session
//! storage: a single well-known key, whole-value read-modify-write, scope
//! ending when the holder is dropped. Serializing on every save and
//! parsing on every load means the full wire contract, temporal field
//! reconstruction included, is exercised even without a file system.

use async_trait::async_trait;
use std::sync::Mutex;
use wayfarer_core::chat::{ChatStateStore, ItineraryChats};
use wayfarer_core::error::Result;
use wayfarer_core::itinerary::{ItineraryStore, SavedItinerary};

/// Tab-lifetime chat state store backed by a serialized JSON cell.
#[derive(Default)]
pub struct MemoryChatStateStore {
    cell: Mutex<Option<String>>,
}

impl MemoryChatStateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw record, parsed or not.
    ///
    /// Useful for exercising the load path against corrupted or partial
    /// stored state.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            cell: Mutex::new(Some(raw.into())),
        }
    }

    /// The raw stored record, if any.
    pub fn raw(&self) -> Option<String> {
        self.cell.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatStateStore for MemoryChatStateStore {
    async fn load_all(&self) -> Result<Vec<ItineraryChats>> {
        let cell = self.cell.lock().unwrap();
        match cell.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, all: &[ItineraryChats]) -> Result<()> {
        let raw = serde_json::to_string(all)?;
        *self.cell.lock().unwrap() = Some(raw);
        Ok(())
    }
}

/// Tab-lifetime itinerary store backed by a serialized JSON cell.
#[derive(Default)]
pub struct MemoryItineraryStore {
    cell: Mutex<Option<String>>,
}

impl MemoryItineraryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItineraryStore for MemoryItineraryStore {
    async fn load_all(&self) -> Result<Vec<SavedItinerary>> {
        let cell = self.cell.lock().unwrap();
        match cell.as_deref() {
            Some(raw) => Ok(serde_json::from_str(raw)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save_all(&self, itineraries: &[SavedItinerary]) -> Result<()> {
        let raw = serde_json::to_string(itineraries)?;
        *self.cell.lock().unwrap() = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.cell.lock().unwrap() = None;
        Ok(())
    }
}
