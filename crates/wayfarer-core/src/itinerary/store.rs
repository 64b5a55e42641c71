//! Itinerary store trait.

use super::model::SavedItinerary;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the list of generated itineraries.
///
/// Deliberately simpler than the chat state store: the whole list is read
/// and written as one record, newest first. Implementations return errors;
/// the catalog decides how to degrade.
#[async_trait]
pub trait ItineraryStore: Send + Sync {
    /// Reads the stored itinerary list, empty if nothing was stored.
    async fn load_all(&self) -> Result<Vec<SavedItinerary>>;

    /// Writes the full list back, replacing the stored record.
    async fn save_all(&self, itineraries: &[SavedItinerary]) -> Result<()>;

    /// Removes the stored record entirely.
    async fn clear(&self) -> Result<()>;
}
