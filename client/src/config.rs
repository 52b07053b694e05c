//! Client configuration from environment variables

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_FILTER: &str = "crowdfund_client=info,warn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    EmptyBaseUrl,
    #[error("API base URL must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),
    #[error("No storage directory configured and no platform data directory found")]
    NoStorageDir,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Filter directives (e.g. "crowdfund_client=debug,info")
    pub filter: String,
    /// Directory for daily-rotated log files; stderr only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

/// Everything needed to build an [`crate::app::AppContext`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin; `/api` is appended by the dispatcher
    pub api_base_url: String,
    /// Directory for durable client storage (persisted session)
    pub storage_dir: Option<PathBuf>,
    pub log: LogConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage_dir: default_storage_dir(),
            log: LogConfig::default(),
        }
    }
}

fn default_storage_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("crowdfund"))
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_base_url: get("CROWDFUND_API_BASE_URL")
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            storage_dir: get("CROWDFUND_STORAGE_DIR")
                .map(PathBuf::from)
                .or_else(default_storage_dir),
            log: LogConfig {
                filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
                log_dir: get("CROWDFUND_LOG_DIR").map(PathBuf::from),
            },
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(url.to_string()));
        }
        Ok(())
    }

    pub fn storage_dir(&self) -> Result<&PathBuf, ConfigError> {
        self.storage_dir.as_ref().ok_or(ConfigError::NoStorageDir)
    }
}
