//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search term sent to the API
    #[serde(default = "default_query")]
    pub query: String,

    /// Listing condition kept in the dataset
    #[serde(default = "default_condition")]
    pub condition: String,

    /// Number of result pages to request
    #[serde(default = "default_pages")]
    pub pages: u32,

    /// Output file path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Response status codes treated as carrying data
    #[serde(default = "default_approved_statuses")]
    pub approved_statuses: Vec<u16>,
}

fn default_query() -> String {
    "tv 4k".to_string()
}

fn default_condition() -> String {
    "new".to_string()
}

fn default_pages() -> u32 {
    100
}

fn default_output() -> PathBuf {
    PathBuf::from("dataset.csv")
}

fn default_approved_statuses() -> Vec<u16> {
    vec![200]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: default_query(),
            condition: default_condition(),
            pages: default_pages(),
            output: default_output(),
            approved_statuses: default_approved_statuses(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("meli-dataset").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(condition) = std::env::var("MELI_CONDITION") {
            self.condition = condition;
        }

        if let Ok(pages) = std::env::var("MELI_PAGES") {
            if let Ok(p) = pages.parse() {
                self.pages = p;
            }
        }

        if let Ok(output) = std::env::var("MELI_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        self
    }
}
