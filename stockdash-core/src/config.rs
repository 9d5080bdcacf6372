//! Dashboard configuration — optional TOML file, every key has a default.
//!
//! Lookup order used by the binaries: an explicit `--config` path, then
//! `./stockdash.toml` if present, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::ChartType;
use crate::rng::DEFAULT_SEED;

pub const DEFAULT_CONFIG_FILE: &str = "stockdash.toml";
pub const DEFAULT_DATA_FILE: &str = "TSLA_Prices.csv";
pub const DEFAULT_TITLE: &str = "Tesla Stock Prices";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV with at least date, open, high, low, close, volume.
    pub data_path: PathBuf,
    /// Price chart title.
    pub title: String,
    /// Seed for the sentiment label draw.
    pub seed: u64,
    /// Price chart mode on startup.
    pub chart_type: ChartType,
    /// TUI log destination. When unset the TUI picks a per-user data dir.
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            title: DEFAULT_TITLE.to_string(),
            seed: DEFAULT_SEED,
            chart_type: ChartType::Line,
            log_file: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the config: `explicit` path if given, else `./stockdash.toml`
    /// if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading config");
            return Self::from_file(path);
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            info!(path = %local.display(), "loading config");
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    /// Builder-style override used for the `--data` flag.
    pub fn with_data_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.data_path = path;
        }
        self
    }
}
