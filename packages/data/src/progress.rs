//! Per-file progress of a data load.
//!
//! The [`Loader`](crate::Loader) announces each file before reading it and
//! reports how it went afterwards, so a front end can show which theme or
//! layer is loading, whether it came from the cache, and what failed.

use std::fmt;
use std::sync::Arc;

use resolve_map_survey_models::{LayerId, Theme};

use crate::LoadError;
use crate::loader::LoadReport;

/// One file of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStep<'a> {
    /// Theme the file belongs to; `None` for static layers.
    pub theme: Option<Theme>,
    /// Layer the file backs.
    pub layer: LayerId,
    /// Path or URL of the file.
    pub file: &'a str,
}

impl fmt::Display for LoadStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.theme {
            Some(theme) => write!(f, "{theme}: {}", self.file),
            None => write!(f, "{}: {}", self.layer, self.file),
        }
    }
}

/// A file that loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLoaded {
    /// Features read from the file.
    pub features: usize,
    /// Whether the file was served from the cache.
    pub from_cache: bool,
}

/// Receives progress while a [`Loader`](crate::Loader) works.
///
/// Every method defaults to doing nothing.
pub trait LoadProgress: Send + Sync {
    /// A load of `files` files is starting.
    fn started(&self, _files: usize) {}

    /// `step` is about to be read.
    fn file_started(&self, _step: &LoadStep<'_>) {}

    /// `step` has been read, or failed to.
    fn file_finished(&self, _step: &LoadStep<'_>, _outcome: Result<FileLoaded, &LoadError>) {}

    /// Every theme and layer has been tried.
    fn finished(&self, _report: &LoadReport) {}
}

/// Ignores all progress.
#[derive(Debug, Default)]
pub struct NullProgress;

impl LoadProgress for NullProgress {}

/// Returns a shared [`NullProgress`] instance.
#[must_use]
pub fn null_progress() -> Arc<dyn LoadProgress> {
    Arc::new(NullProgress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_named_by_theme_or_layer() {
        let theme = LoadStep {
            theme: Some(Theme::Water),
            layer: LayerId::WaterPoints,
            file: "Water_new.canonical.geojson",
        };
        assert_eq!(theme.to_string(), "water: Water_new.canonical.geojson");

        let layer = LoadStep {
            theme: None,
            layer: LayerId::FarmersPoints,
            file: "Model_Predictions.geojson",
        };
        assert_eq!(layer.to_string(), "farmers-points: Model_Predictions.geojson");
    }
}
