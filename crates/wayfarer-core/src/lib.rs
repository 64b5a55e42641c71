//! Wayfarer core: domain model and session management for the travel
//! planner front end.
//!
//! The central piece is [`chat::ChatSessionManager`], which keeps multiple
//! independent chat threads per itinerary consistent between memory and a
//! pluggable [`chat::ChatStateStore`]. The [`itinerary`] module carries the
//! simpler catalog of generated itineraries, and [`generation`] defines the
//! port to the external AI workflow service.

pub mod chat;
pub mod error;
pub mod generation;
pub mod itinerary;

// Re-export common error type
pub use error::WayfarerError;
