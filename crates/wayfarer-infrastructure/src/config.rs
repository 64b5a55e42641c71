//! API configuration.
//!
//! Configuration for the external generation backend is read from
//! `~/.config/wayfarer/config.toml` when present, with environment
//! variables taking precedence:
//!
//! - `WAYFARER_BACKEND_URL` — base URL of the generation backend
//! - `WAYFARER_CHAT_MODEL` — optional model override forwarded to the
//!   workflow service

use crate::paths::WayfarerPaths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use wayfarer_core::error::Result;

const DEFAULT_BASE_URL: &str = "https://platform.gensee.ai";

/// Configuration for the generation backend client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend exposing `/api/itinerary` and `/api/chat`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Optional model override forwarded with every request.
    #[serde(default)]
    pub model_override: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model_override: None,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the default location with environment
    /// overrides applied. A missing config file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = WayfarerPaths::config_file()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a specific TOML file, without environment
    /// overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&raw)?)
    }

    /// Applies `WAYFARER_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("WAYFARER_BACKEND_URL") {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Ok(model) = std::env::var("WAYFARER_CHAT_MODEL") {
            if !model.is_empty() {
                self.model_override = Some(model);
            }
        }
    }
}
