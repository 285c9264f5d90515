#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Data loading for the survey dashboard.
//!
//! Reads the theme registry, fetches each theme's `GeoJSON` files through a
//! versioned cache, merges them into a [`FeatureStore`], and persists the
//! dashboard's UI state between runs.
//!
//! [`FeatureStore`]: resolve_map_survey_models::FeatureStore

pub mod cache;
pub mod fetch;
pub mod loader;
pub mod progress;
pub mod themes;
pub mod ui_state;

pub use cache::{Cache, CacheBackend, CacheStats, FileCache, MemoryCache};
pub use fetch::{Fetcher, FileFetcher, HttpFetcher};
pub use loader::{LoadReport, Loader};
pub use progress::{FileLoaded, LoadProgress, LoadStep, NullProgress, null_progress};
pub use themes::{Registry, registry};
pub use ui_state::UiState;

/// Errors that can occur while loading data files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// I/O error (file read/write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File parsed as JSON but is not a usable `FeatureCollection`.
    #[error("Invalid GeoJSON in {path}: {message}")]
    InvalidGeoJson {
        /// File path.
        path: String,
        /// What was wrong.
        message: String,
    },
}
