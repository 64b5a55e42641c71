//! Chat state store trait.
//!
//! Defines the interface for persisting per-itinerary chat state.

use super::model::ItineraryChats;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract store for the whole collection of per-itinerary chat states.
///
/// This trait decouples the session manager from the specific storage
/// mechanism (tab-scoped memory cell, JSON file, ...). The store always
/// reads and writes the entire collection under one well-known location;
/// the provided methods implement the per-itinerary access on top of that.
///
/// # Implementation Notes
///
/// Implementations must return errors rather than swallowing them; the
/// decision to degrade to "no history" belongs to the caller (the session
/// manager's load path).
#[async_trait]
pub trait ChatStateStore: Send + Sync {
    /// Reads the full persisted collection.
    ///
    /// # Returns
    ///
    /// - `Ok(states)`: The stored collection, empty if nothing was stored
    /// - `Err(_)`: The record exists but could not be read or parsed
    async fn load_all(&self) -> Result<Vec<ItineraryChats>>;

    /// Writes the full collection back, replacing the stored record.
    async fn save_all(&self, all: &[ItineraryChats]) -> Result<()>;

    /// Finds the chat state for one itinerary within the full collection.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(state))`: Chat state found for this itinerary
    /// - `Ok(None)`: No stored state for this itinerary
    /// - `Err(_)`: The collection could not be read
    async fn load_for(&self, itinerary_id: &str) -> Result<Option<ItineraryChats>> {
        let all = self.load_all().await?;
        Ok(all.into_iter().find(|c| c.itinerary_id == itinerary_id))
    }

    /// Upserts one itinerary's chat state into the stored collection.
    ///
    /// Empty sessions are dropped before writing: they are working-memory
    /// only and never durable. The entry replaces an existing one with the
    /// same `itinerary_id`, or is appended if none exists.
    async fn save_for(&self, state: &ItineraryChats) -> Result<()> {
        let filtered = state.without_empty_sessions();
        let mut all = self.load_all().await?;
        match all
            .iter_mut()
            .find(|c| c.itinerary_id == filtered.itinerary_id)
        {
            Some(existing) => *existing = filtered,
            None => all.push(filtered),
        }
        self.save_all(&all).await
    }
}
