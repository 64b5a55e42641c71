//! Itinerary catalog management.

use super::model::SavedItinerary;
use super::store::ItineraryStore;
use std::sync::Arc;

/// Manages the list of generated itineraries.
///
/// `ItineraryCatalog` is responsible for:
/// - Loading the saved list on startup (degrading to empty on failure)
/// - Adding new itineraries (prepended, newest first)
/// - Removing and clearing itineraries
///
/// Like the chat session manager, every mutation writes through to the
/// injected store before returning, and a failed write is logged while the
/// in-memory list keeps the update.
pub struct ItineraryCatalog {
    store: Arc<dyn ItineraryStore>,
    itineraries: Vec<SavedItinerary>,
    loaded: bool,
}

impl ItineraryCatalog {
    /// Creates a new catalog over a storage backend. Call
    /// [`load`](Self::load) before reading.
    pub fn new(store: Arc<dyn ItineraryStore>) -> Self {
        Self {
            store,
            itineraries: Vec::new(),
            loaded: false,
        }
    }

    /// Loads the saved itineraries from storage.
    ///
    /// An unreadable record degrades to an empty list; history silently
    /// resets rather than surfacing a raw storage error.
    pub async fn load(&mut self) {
        match self.store.load_all().await {
            Ok(itineraries) => {
                tracing::debug!(count = itineraries.len(), "loaded saved itineraries");
                self.itineraries = itineraries;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load itineraries, starting empty");
                self.itineraries = Vec::new();
            }
        }
        self.loaded = true;
    }

    /// Prepends a new itinerary and writes through.
    pub async fn add(&mut self, itinerary: SavedItinerary) {
        self.itineraries.insert(0, itinerary);
        self.persist().await;
    }

    /// Removes the itinerary with the given id, if present, and writes
    /// through.
    pub async fn remove(&mut self, id: &str) {
        self.itineraries.retain(|it| it.id != id);
        self.persist().await;
    }

    /// Removes every itinerary and the stored record.
    pub async fn clear(&mut self) {
        self.itineraries.clear();
        if let Err(e) = self.store.clear().await {
            tracing::warn!(error = %e, "failed to clear stored itineraries");
        }
    }

    /// The saved itineraries, newest first.
    pub fn itineraries(&self) -> &[SavedItinerary] {
        &self.itineraries
    }

    /// Finds an itinerary by id.
    pub fn get(&self, id: &str) -> Option<&SavedItinerary> {
        self.itineraries.iter().find(|it| it.id == id)
    }

    /// Whether the initial load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    async fn persist(&self) {
        if let Err(e) = self.store.save_all(&self.itineraries).await {
            tracing::warn!(error = %e, "failed to persist itineraries, keeping in-memory update");
        }
    }
}
