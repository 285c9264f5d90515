//! Optional `resolve_map.toml` configuration.
//!
//! Every field has a default, so a missing file is not an error. Command
//! line flags override whatever the file says.

use std::path::{Path, PathBuf};

use resolve_map_data::cache::{CACHE_TTL_DAYS, DATA_VERSION};
use serde::Deserialize;

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "resolve_map.toml";

/// Errors that can occur while reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error (file read).
    #[error("I/O error reading {path}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The file is not valid config TOML.
    #[error("Invalid config {path}: {source}")]
    Toml {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

/// Where data files come from and how they are cached.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    /// Local directory the data paths are relative to.
    pub data_root: PathBuf,
    /// Base URL to fetch data from instead of `data_root`.
    pub base_url: Option<String>,
    /// Directory of the file cache.
    pub cache_dir: PathBuf,
    /// Version stamped on cache entries.
    pub data_version: String,
    /// Days a cache entry stays fresh.
    pub cache_ttl_days: i64,
    /// File the UI state is persisted to.
    pub ui_state_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_root: PathBuf::from("."),
            base_url: None,
            cache_dir: PathBuf::from(".resolve_map/cache"),
            data_version: DATA_VERSION.to_string(),
            cache_ttl_days: CACHE_TTL_DAYS,
            ui_state_path: PathBuf::from(".resolve_map/ui_state.json"),
        }
    }
}

impl Config {
    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// * If the text is not valid config TOML
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads `path`, falling back to the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// * If the file exists but cannot be read
    /// * If the file is not valid config TOML
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
