//! Configuration management for ShowScout
//!
//! Config is stored at ~/.config/showscout/config.toml.
//! `SHOWSCOUT_BASE_URL` overrides the API endpoint.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::api::tvmaze::DEFAULT_BASE_URL;

/// Environment variable overriding [`Config::base_url`]
pub const BASE_URL_ENV: &str = "SHOWSCOUT_BASE_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RESULT_LIMIT: usize = 20;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// TVmaze API base URL
    pub base_url: Option<String>,
    /// Image shown when a record has none
    pub default_image: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Maximum number of shows printed by the CLI
    pub result_limit: Option<usize>,
}

impl Config {
    /// Get config file path (~/.config/showscout/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("showscout").join("config.toml"))
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let config = std::fs::read_to_string(path)
            .ok()
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default();
        debug!(path = %path.display(), ?config, "loaded config");
        config
    }

    /// API base URL with fallback chain:
    /// 1. Environment variable SHOWSCOUT_BASE_URL
    /// 2. Value from config file
    /// 3. Public TVmaze endpoint
    pub fn base_url(&self) -> String {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                return url;
            }
        }

        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn result_limit(&self) -> usize {
        self.result_limit
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_RESULT_LIMIT)
    }
}
