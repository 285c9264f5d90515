//! Log-backed [`LoadProgress`].

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use resolve_map_data::{FileLoaded, LoadError, LoadProgress, LoadReport, LoadStep};

/// Reports each loaded file as an `info` log line, numbered against the
/// total.
#[derive(Debug, Default)]
pub struct LogProgress {
    total: AtomicUsize,
    done: AtomicUsize,
}

impl LogProgress {
    /// Creates a shared instance.
    #[must_use]
    pub fn shared() -> Arc<dyn LoadProgress> {
        Arc::new(Self::default())
    }
}

impl LoadProgress for LogProgress {
    fn started(&self, files: usize) {
        self.total.store(files, Ordering::Relaxed);
        self.done.store(0, Ordering::Relaxed);
    }

    fn file_finished(&self, step: &LoadStep<'_>, outcome: Result<FileLoaded, &LoadError>) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        let total = self.total.load(Ordering::Relaxed);
        match outcome {
            Ok(FileLoaded {
                features,
                from_cache: true,
            }) => log::info!("[{done}/{total}] {step}: {features} features (cached)"),
            Ok(FileLoaded { features, .. }) => {
                log::info!("[{done}/{total}] {step}: {features} features");
            }
            Err(e) => log::warn!("[{done}/{total}] {step}: {e}"),
        }
    }

    fn finished(&self, report: &LoadReport) {
        log::info!(
            "Loaded {} themes and {} layers ({} failed)",
            report.themes.len(),
            report.static_layers.len(),
            report.failures.len()
        );
    }
}
