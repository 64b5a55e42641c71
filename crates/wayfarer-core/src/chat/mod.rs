//! Chat session domain module.
//!
//! This module contains the chat data model, the storage port, and the
//! session manager that keeps in-memory and persisted state consistent.
//!
//! # Module Structure
//!
//! - `message`: Atomic utterances (`Sender`, `ChatMessage`)
//! - `model`: Session-level entities (`ChatExchange`, `ChatSession`,
//!   `ItineraryChats`)
//! - `store`: Storage port for persisting per-itinerary chat state
//! - `manager`: Session lifecycle management (`ChatSessionManager`)

mod manager;
mod message;
mod model;
mod store;

// Re-export public API
pub use manager::{ASSISTANT_GREETING, ChatSessionManager};
pub use message::{ChatMessage, Sender};
pub use model::{
    ChatExchange, ChatSession, ItineraryChats, SESSION_NAME_MAX_CHARS, derive_session_name,
};
pub use store::ChatStateStore;
