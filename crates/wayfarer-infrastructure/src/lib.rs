//! Infrastructure adapters for wayfarer: concrete stores, paths,
//! configuration, and the HTTP generation client.

pub mod config;
pub mod http_generation;
pub mod json_chat_store;
pub mod json_itinerary_store;
pub mod memory_store;
pub mod paths;


pub use crate::config::ApiConfig;
pub use crate::http_generation::HttpGenerationService;
pub use crate::json_chat_store::JsonFileChatStateStore;
pub use crate::json_itinerary_store::JsonFileItineraryStore;
pub use crate::memory_store::{MemoryChatStateStore, MemoryItineraryStore};
pub use crate::paths::WayfarerPaths;
