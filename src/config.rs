use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::generator::DEFAULT_LOCATION;
use crate::domain::FilterSettings;
use crate::favorites::DEFAULT_SLOT;

pub const CONFIG_ENV: &str = "TRAVEL_FINDER_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
    pub filters: FilterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_workers: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database_path: PathBuf,

    /// Storage slot holding the saved listings.
    pub favorites_slot: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("travel_finder.sqlite3"),
            favorites_slot: DEFAULT_SLOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Listings generated per search, before filtering.
    pub result_count: usize,

    /// Simulated network latency.
    pub latency_ms: u64,

    /// Label used when the query is blank.
    pub default_location: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            result_count: 12,
            latency_ms: 450,
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub max_price: u32,
    pub min_stars: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_price: 25000,
            min_stars: 0,
        }
    }
}

impl FilterConfig {
    pub fn initial_settings(&self) -> FilterSettings {
        FilterSettings::new(self.max_price, self.min_stars)
    }
}

impl AppConfig {
    /// `$TRAVEL_FINDER_CONFIG`, then `./config.toml`, else defaults.
    /// Also returns the file that was read, if any.
    pub fn load() -> Result<(Self, Option<PathBuf>)> {
        match Self::config_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Ok((Self::load_from_path(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        if let Ok(p) = std::env::var(CONFIG_ENV) {
            paths.push(PathBuf::from(p));
        }
        paths.push(PathBuf::from("config.toml"));

        paths
    }
}
