//! Loads every theme and static layer into a [`FeatureStore`].
//!
//! Loading is sequential. Each file is looked up in the cache before it is
//! fetched, and written back after a successful fetch. A theme or layer
//! that fails to load is logged and left empty; it never stops the others.

use std::sync::Arc;

use geojson::FeatureCollection;
use resolve_map_filter::stagger_duplicate_coordinates;
use resolve_map_survey_models::{FeatureStore, LayerId, SurveyFeature, Theme, features_from_collection};
use serde::Serialize;

use crate::LoadError;
use crate::cache::Cache;
use crate::fetch::{Fetcher, parse_feature_collection};
use crate::progress::{FileLoaded, LoadProgress, LoadStep, null_progress};
use crate::themes::{Registry, StaticLayerDefinition, ThemeDefinition};

/// What happened to each theme and layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    /// Themes loaded, with their merged feature counts.
    pub themes: Vec<(Theme, usize)>,
    /// Static layers loaded, with their feature counts.
    pub static_layers: Vec<(LayerId, usize)>,
    /// Layers that failed, with the reason.
    pub failures: Vec<(LayerId, String)>,
}

impl LoadReport {
    /// Whether everything loaded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Loads configured data through a [`Fetcher`] and a [`Cache`].
pub struct Loader<F: Fetcher> {
    fetcher: F,
    cache: Cache,
    progress: Arc<dyn LoadProgress>,
}

impl<F: Fetcher> Loader<F> {
    /// Creates a loader without progress reporting.
    #[must_use]
    pub fn new(fetcher: F, cache: Cache) -> Self {
        Self {
            fetcher,
            cache,
            progress: null_progress(),
        }
    }

    /// Reports each file's start and outcome to `progress`.
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn LoadProgress>) -> Self {
        self.progress = progress;
        self
    }

    /// The cache in use.
    #[must_use]
    pub const fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Loads one `GeoJSON` file, preferring the cache.
    ///
    /// # Errors
    ///
    /// * If the fetch fails
    /// * If the file is not a valid `FeatureCollection`
    pub async fn load_geojson(&self, key: &str, path: &str) -> Result<FeatureCollection, LoadError> {
        self.read_collection(key, path)
            .await
            .map(|(collection, _)| collection)
    }

    /// Like [`Self::load_geojson`], also telling whether the cache served it.
    async fn read_collection(
        &self,
        key: &str,
        path: &str,
    ) -> Result<(FeatureCollection, bool), LoadError> {
        if let Some(cached) = self.cache.get(key).await {
            match parse_feature_collection(path, cached) {
                Ok(collection) => return Ok((collection, true)),
                Err(e) => log::warn!("Ignoring unusable cache entry {key}: {e}"),
            }
        }

        log::info!("Fetching {key} from {path}");
        let value = self.fetcher.fetch(path).await?;
        let collection = parse_feature_collection(path, value.clone())?;
        self.cache.put(key, value).await;

        Ok((collection, false))
    }

    /// Reads one file into features, reporting it as `step`.
    async fn load_step(
        &self,
        step: &LoadStep<'_>,
        key: &str,
    ) -> Result<Vec<SurveyFeature>, LoadError> {
        self.progress.file_started(step);
        match self.read_collection(key, step.file).await {
            Ok((collection, from_cache)) => {
                let features = features_from_collection(collection);
                self.progress.file_finished(
                    step,
                    Ok(FileLoaded {
                        features: features.len(),
                        from_cache,
                    }),
                );
                Ok(features)
            }
            Err(e) => {
                self.progress.file_finished(step, Err(&e));
                Err(e)
            }
        }
    }

    /// Loads and merges every file of a theme, in order.
    ///
    /// # Errors
    ///
    /// * If any of the theme's files fails to load
    pub async fn load_theme(&self, def: &ThemeDefinition) -> Result<Vec<SurveyFeature>, LoadError> {
        let mut features = Vec::new();
        for file in &def.files {
            let step = LoadStep {
                theme: Some(def.theme),
                layer: def.layer(),
                file,
            };
            features.extend(self.load_step(&step, &def.cache_key(file)).await?);
        }
        Ok(features)
    }

    /// Loads one static layer. Layers that fan out overlapping points are
    /// staggered here so the unfiltered view is already spread out.
    ///
    /// # Errors
    ///
    /// * If the layer's file fails to load
    pub async fn load_static_layer(
        &self,
        def: &StaticLayerDefinition,
    ) -> Result<Vec<SurveyFeature>, LoadError> {
        let step = LoadStep {
            theme: None,
            layer: def.layer,
            file: &def.file,
        };
        let mut features = self.load_step(&step, &def.cache_key()).await?;

        if def.layer.staggers_points() {
            stagger_duplicate_coordinates(&mut features);
        }
        Ok(features)
    }

    /// Loads every theme and static layer of `registry`.
    ///
    /// Failures are isolated: a failed theme or layer is stored empty and
    /// recorded in the report.
    pub async fn load_all(&self, registry: &Registry) -> (FeatureStore, LoadReport) {
        let mut store = FeatureStore::new();
        let mut report = LoadReport::default();
        self.progress.started(registry.file_count());

        for def in &registry.themes {
            match self.load_theme(def).await {
                Ok(features) => {
                    log::info!("Loaded theme {}: {} features", def.theme, features.len());
                    report.themes.push((def.theme, features.len()));
                    store.insert_theme(def.theme, features);
                }
                Err(e) => {
                    log::error!("Failed to load theme {}: {e}", def.theme);
                    report.failures.push((def.layer(), e.to_string()));
                    store.insert_theme(def.theme, Vec::new());
                }
            }
        }

        for def in &registry.static_layers {
            match self.load_static_layer(def).await {
                Ok(features) => {
                    log::info!("Loaded layer {}: {} features", def.layer, features.len());
                    report.static_layers.push((def.layer, features.len()));
                    store.insert_legacy(def.layer, features);
                }
                Err(e) => {
                    log::error!("Failed to load static layer {}: {e}", def.key);
                    report.failures.push((def.layer, e.to_string()));
                    store.insert_legacy(def.layer, Vec::new());
                }
            }
        }

        self.progress.finished(&report);

        (store, report)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::cache::MemoryCache;
    use crate::themes::registry;

    /// Serves fixed documents and counts fetches.
    struct StaticFetcher {
        files: BTreeMap<String, Value>,
        fetches: AtomicUsize,
    }

    impl StaticFetcher {
        fn new(files: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
            Self {
                files: files
                    .into_iter()
                    .map(|(path, value)| (path.to_string(), value))
                    .collect(),
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, path: &str) -> Result<Value, LoadError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            self.files.get(path).cloned().ok_or_else(|| LoadError::Status {
                url: path.to_string(),
                status: 404,
            })
        }
    }

    /// Records every progress event as a line of text.
    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl RecordingProgress {
        fn record(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl LoadProgress for RecordingProgress {
        fn started(&self, files: usize) {
            self.record(format!("started {files}"));
        }

        fn file_started(&self, step: &LoadStep<'_>) {
            self.record(format!("start {step}"));
        }

        fn file_finished(&self, step: &LoadStep<'_>, outcome: Result<FileLoaded, &LoadError>) {
            self.record(match outcome {
                Ok(loaded) => format!(
                    "done {step} {} cached={}",
                    loaded.features, loaded.from_cache
                ),
                Err(_) => format!("failed {step}"),
            });
        }

        fn finished(&self, report: &LoadReport) {
            self.record(format!("finished {} failures", report.failures.len()));
        }
    }

    fn points(count: usize, lng: f64, lat: f64) -> Value {
        let features: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [lng, lat] },
                    "properties": { "source_row": i }
                })
            })
            .collect();
        json!({ "type": "FeatureCollection", "features": features })
    }

    fn fixture() -> StaticFetcher {
        StaticFetcher::new([
            ("data/geojson/canonical/Water.canonical.geojson", points(2, 35.6, 33.7)),
            ("data/geojson/canonical/Water_new.canonical.geojson", points(3, 35.9, 33.8)),
            ("data/geojson/canonical/Energy.canonical.geojson", json!({ "type": "Feature" })),
            ("data/geojson/Model_Predictions.geojson", points(4, 35.6, 33.7)),
        ])
    }

    #[tokio::test]
    async fn merges_theme_files_and_isolates_failures() {
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())));
        let (store, report) = loader.load_all(&registry()).await;

        assert_eq!(store.theme(Theme::Water).map(<[_]>::len), Some(5));
        assert_eq!(report.themes, vec![(Theme::Water, 5)]);

        let energy = store.resolve(LayerId::EnergyPoints).unwrap();
        assert!(energy.features.is_empty());
        assert!(!report.is_complete());
        assert!(
            report
                .failures
                .iter()
                .any(|(layer, _)| *layer == LayerId::EnergyPoints)
        );
        assert_eq!(report.static_layers, vec![(LayerId::FarmersPoints, 4)]);
    }

    #[tokio::test]
    async fn farmer_points_are_staggered_on_load() {
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())));
        let (store, _) = loader.load_all(&registry()).await;

        let farmers = store.resolve(LayerId::FarmersPoints).unwrap();
        let positions: Vec<_> = farmers.features.iter().filter_map(SurveyFeature::point).collect();
        assert_eq!(positions[0], (35.6, 33.7));
        assert!(positions[1..].iter().all(|p| *p != (35.6, 33.7)));
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())));

        loader
            .load_geojson("water", "data/geojson/canonical/Water.canonical.geojson")
            .await
            .unwrap();
        loader
            .load_geojson("water", "data/geojson/canonical/Water.canonical.geojson")
            .await
            .unwrap();

        assert_eq!(loader.fetcher.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(loader.cache().stats().await.item_count, 1);
    }

    #[tokio::test]
    async fn invalid_files_are_not_cached() {
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())));
        let result = loader
            .load_geojson("energy", "data/geojson/canonical/Energy.canonical.geojson")
            .await;

        assert!(matches!(result, Err(LoadError::InvalidGeoJson { .. })));
        assert!(loader.cache().get("energy").await.is_none());
    }

    #[tokio::test]
    async fn progress_reports_each_file_with_its_theme() {
        let progress = Arc::new(RecordingProgress::default());
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())))
            .with_progress(progress.clone());
        let registry = registry();
        let (_, report) = loader.load_all(&registry).await;

        let events = progress.events();
        assert_eq!(events[0], format!("started {}", registry.file_count()));
        assert_eq!(
            events[1..5],
            [
                "start water: data/geojson/canonical/Water.canonical.geojson",
                "done water: data/geojson/canonical/Water.canonical.geojson 2 cached=false",
                "start water: data/geojson/canonical/Water_new.canonical.geojson",
                "done water: data/geojson/canonical/Water_new.canonical.geojson 3 cached=false",
            ]
        );
        assert!(events.contains(&"failed energy: data/geojson/canonical/Energy.canonical.geojson".to_string()));
        assert!(events.contains(
            &"done farmers-points: data/geojson/Model_Predictions.geojson 4 cached=false".to_string()
        ));
        assert_eq!(
            events.last(),
            Some(&format!("finished {} failures", report.failures.len()))
        );
    }

    #[tokio::test]
    async fn progress_tells_cached_files_apart() {
        let progress = Arc::new(RecordingProgress::default());
        let loader = Loader::new(fixture(), Cache::new(Box::new(MemoryCache::new())))
            .with_progress(progress.clone());
        let registry = registry();

        loader.load_all(&registry).await;
        loader.load_all(&registry).await;

        let events = progress.events();
        let water = "done water: data/geojson/canonical/Water.canonical.geojson 2";
        assert!(events.contains(&format!("{water} cached=false")));
        assert!(events.contains(&format!("{water} cached=true")));
    }
}
