//! Configuration - API endpoint and refresh settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const CONFIG_FILE: &str = "edudash.yml";

/// Dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
}

/// API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the dashboard API (e.g. "http://localhost:5000")
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Refresh cadence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    /// Seconds between automatic stats refreshes
    pub stats_interval_secs: u64,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            stats_interval_secs: 300,
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Auto-detect and load config
    /// Priority:
    /// 1. edudash.yml in the current directory
    /// 2. edudash.yml in the user config directory
    /// 3. Built-in defaults
    pub fn auto_load() -> Result<Self> {
        let local = Path::new(CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_path = config_dir.join("edudash").join(CONFIG_FILE);
            if user_path.exists() {
                return Self::from_file(&user_path);
            }
        }

        Ok(Self::default())
    }

    /// Interval between automatic stats refreshes
    pub fn stats_interval(&self) -> Duration {
        Duration::from_secs(self.refresh.stats_interval_secs)
    }

    /// Per-request HTTP timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}
