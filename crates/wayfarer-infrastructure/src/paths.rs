//! Unified path management for wayfarer data files.
//!
//! All persisted records (chat state, itinerary list, configuration) live
//! under one platform config directory so every storage adapter resolves
//! locations the same way.

use std::path::PathBuf;
use wayfarer_core::error::{Result, WayfarerError};

/// Unified path management for wayfarer.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/wayfarer/          # Config directory
/// ├── config.toml              # API configuration
/// ├── chats.json               # Per-itinerary chat state (whole collection)
/// └── itineraries.json         # Saved itinerary list
/// ```
pub struct WayfarerPaths;

impl WayfarerPaths {
    /// Returns the wayfarer configuration directory.
    ///
    /// # Errors
    ///
    /// Returns a config error if the platform config directory cannot be
    /// determined.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("wayfarer"))
            .ok_or_else(|| WayfarerError::config("Cannot find config directory"))
    }

    /// Returns the config directory, creating it if missing.
    pub fn ensure_config_dir() -> Result<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Path of the whole-collection chat state record.
    pub fn chats_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("chats.json"))
    }

    /// Path of the saved itinerary list.
    pub fn itineraries_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("itineraries.json"))
    }

    /// Path of the API configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
