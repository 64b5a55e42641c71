//! Itinerary domain module.
//!
//! - `model`: Input modes, validation, prompt rendering, saved itineraries
//! - `store`: Storage port for the itinerary list
//! - `catalog`: Create/list/delete management with write-through

mod catalog;
mod model;
mod store;

// Re-export public API
pub use catalog::ItineraryCatalog;
pub use model::{ItineraryInput, SavedItinerary};
pub use store::ItineraryStore;
