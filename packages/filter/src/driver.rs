//! Filter application driver.
//!
//! Resolves a layer's features, runs them through the predicate engine when
//! filtering is enabled, staggers overlapping points where the layer asks
//! for it, and pushes the result to the map.

use geojson::FeatureCollection;
use resolve_map_survey_models::{
    DataSource, FeatureStore, Language, LayerId, SurveyFeature, to_feature_collection,
};
use serde::Serialize;

use crate::predicate::filter_features;
use crate::stagger::stagger_duplicate_coordinates;
use crate::state::FilterStateManager;
use crate::{FilterError, SinkError};

/// Receives layer data and visibility changes.
///
/// Implemented by whatever renders the map; the filter engine never draws.
pub trait MapSink {
    /// Replaces the data shown for `layer`.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the update could not be delivered.
    fn set_data(&mut self, layer: LayerId, data: &FeatureCollection) -> Result<(), SinkError>;

    /// Shows or hides one derived sub-layer (`water-points-symbols`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the update could not be delivered.
    fn set_visibility(&mut self, sub_layer: &str, visible: bool) -> Result<(), SinkError>;
}

/// Result of applying a layer's filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApplyOutcome {
    /// The layer that was updated.
    pub layer: LayerId,
    /// Features pushed to the map.
    pub count: usize,
    /// Features in the unfiltered collection.
    pub total: usize,
    /// Whether filtering was enabled.
    pub filtered: bool,
    /// Canonical theme data or legacy flat data.
    #[serde(skip)]
    pub source: DataSource,
}

/// Computes the features `layer` should currently show.
///
/// With filtering disabled this is the full collection; otherwise the
/// features passing every stored criterion, in their original order.
///
/// # Errors
///
/// * If no data is loaded for the layer
pub fn filter_layer(
    store: &FeatureStore,
    state: &FilterStateManager,
    layer: LayerId,
    language: Language,
) -> Result<(Vec<SurveyFeature>, ApplyOutcome), FilterError> {
    let resolved = store.resolve(layer).ok_or(FilterError::UnknownLayer(layer))?;
    let total = resolved.features.len();
    let filtered = state.is_enabled(layer);

    let mut features = if filtered {
        let filters = state.active_filters(layer);
        filter_features(resolved.features, layer, &filters, language)
    } else {
        resolved.features.to_vec()
    };

    if filtered && layer.staggers_points() {
        stagger_duplicate_coordinates(&mut features);
    }

    let outcome = ApplyOutcome {
        layer,
        count: features.len(),
        total,
        filtered,
        source: resolved.source,
    };

    Ok((features, outcome))
}

/// Recomputes `layer` and pushes the result to `sink`.
///
/// Calling this again with unchanged state pushes an identical collection.
///
/// # Errors
///
/// * If no data is loaded for the layer
/// * If the sink rejects the update
pub fn apply_filters_for_layer(
    sink: &mut dyn MapSink,
    store: &FeatureStore,
    state: &FilterStateManager,
    layer: LayerId,
    language: Language,
) -> Result<ApplyOutcome, FilterError> {
    let (features, outcome) = filter_layer(store, state, layer, language)?;

    sink.set_data(layer, &to_feature_collection(&features))?;

    if outcome.filtered {
        log::info!("{layer}: {} of {} features match", outcome.count, outcome.total);
    } else {
        log::debug!("{layer}: filtering disabled, showing all {} features", outcome.total);
    }

    Ok(outcome)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use resolve_map_filter_models::{FilterCriterion, FilterField};
    use resolve_map_survey_models::{FeatureProperties, Theme};
    use serde_json::{Value, json};

    /// Sink recording every update.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub data: Vec<(LayerId, FeatureCollection)>,
        pub visibility: BTreeMap<String, bool>,
    }

    impl MapSink for RecordingSink {
        fn set_data(&mut self, layer: LayerId, data: &FeatureCollection) -> Result<(), SinkError> {
            self.data.push((layer, data.clone()));
            Ok(())
        }

        fn set_visibility(&mut self, sub_layer: &str, visible: bool) -> Result<(), SinkError> {
            self.visibility.insert(sub_layer.to_string(), visible);
            Ok(())
        }
    }

    struct RejectingSink;

    impl MapSink for RejectingSink {
        fn set_data(&mut self, _layer: LayerId, _data: &FeatureCollection) -> Result<(), SinkError> {
            Err(SinkError::Rejected("map not ready".to_string()))
        }

        fn set_visibility(&mut self, _sub_layer: &str, _visible: bool) -> Result<(), SinkError> {
            Ok(())
        }
    }

    fn point(lng: f64, lat: f64, properties: Value) -> SurveyFeature {
        SurveyFeature {
            id: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::Point(vec![lng, lat]))),
            properties: FeatureProperties::from_json_object(properties.as_object().cloned()),
        }
    }

    pub fn sample_store() -> FeatureStore {
        let mut store = FeatureStore::new();
        store.insert_theme(
            Theme::Water,
            vec![
                point(
                    35.6,
                    33.7,
                    json!({ "featureId": "w1", "values": {
                        "en": { "_7": "Sufficient" }, "ar": { "_7": "كافي" } } }),
                ),
                point(
                    35.5,
                    33.6,
                    json!({ "featureId": "w2", "values": {
                        "en": { "_7": "Insufficient" }, "ar": { "_7": "غير كافي" } } }),
                ),
            ],
        );
        store.insert_legacy(
            LayerId::FarmersPoints,
            (0..5)
                .map(|i| {
                    point(
                        35.6,
                        33.7,
                        json!({ "source_row": i, "Practices_Regen": if i % 2 == 0 { "Yes" } else { "No" } }),
                    )
                })
                .collect(),
        );
        store
    }

    #[test]
    fn disabled_filtering_shows_everything() {
        let store = sample_store();
        let mut state = FilterStateManager::new();
        state
            .set_criterion(
                LayerId::WaterPoints,
                FilterField::WaterSuff,
                FilterCriterion::multi_select(["Sufficient"]),
            )
            .unwrap();

        let mut sink = RecordingSink::default();
        let outcome =
            apply_filters_for_layer(&mut sink, &store, &state, LayerId::WaterPoints, Language::En)
                .unwrap();

        assert!(!outcome.filtered);
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.source, DataSource::Canonical(Theme::Water));
        assert_eq!(sink.data[0].1.features.len(), 2);
    }

    #[test]
    fn enabled_filtering_pushes_matching_features() {
        let store = sample_store();
        let mut state = FilterStateManager::new();
        state
            .set_criterion(
                LayerId::WaterPoints,
                FilterField::WaterSuff,
                FilterCriterion::multi_select(["كافي"]),
            )
            .unwrap();
        state.set_enabled(LayerId::WaterPoints, true);

        let mut sink = RecordingSink::default();
        let outcome =
            apply_filters_for_layer(&mut sink, &store, &state, LayerId::WaterPoints, Language::Ar)
                .unwrap();

        assert_eq!(outcome.count, 1);
        assert_eq!(outcome.total, 2);
        let pushed = &sink.data[0].1.features[0];
        assert_eq!(
            pushed.properties.as_ref().unwrap()["featureId"],
            json!("w1")
        );
    }

    #[test]
    fn applying_twice_is_idempotent() {
        let store = sample_store();
        let mut state = FilterStateManager::new();
        state
            .set_criterion(
                LayerId::FarmersPoints,
                FilterField::FarmerRegenPractices,
                FilterCriterion::YesNo { value: true },
            )
            .unwrap();
        state.set_enabled(LayerId::FarmersPoints, true);

        let mut sink = RecordingSink::default();
        for _ in 0..2 {
            apply_filters_for_layer(
                &mut sink,
                &store,
                &state,
                LayerId::FarmersPoints,
                Language::En,
            )
            .unwrap();
        }

        assert_eq!(sink.data.len(), 2);
        assert_eq!(sink.data[0].1.features.len(), 3);
        assert_eq!(
            serde_json::to_string(&sink.data[0].1).unwrap(),
            serde_json::to_string(&sink.data[1].1).unwrap()
        );

        let first = sink.data[0].1.features[0].geometry.as_ref().unwrap();
        assert_eq!(first.value, geojson::Value::Point(vec![35.6, 33.7]));
        let second = sink.data[0].1.features[1].geometry.as_ref().unwrap();
        assert_ne!(second.value, geojson::Value::Point(vec![35.6, 33.7]));
    }

    #[test]
    fn unloaded_layer_is_an_error() {
        let store = sample_store();
        let state = FilterStateManager::new();
        let mut sink = RecordingSink::default();
        assert!(matches!(
            apply_filters_for_layer(&mut sink, &store, &state, LayerId::FirePoints, Language::En),
            Err(FilterError::UnknownLayer(LayerId::FirePoints))
        ));
        assert!(sink.data.is_empty());
    }

    #[test]
    fn sink_errors_propagate() {
        let store = sample_store();
        let state = FilterStateManager::new();
        assert!(matches!(
            apply_filters_for_layer(
                &mut RejectingSink,
                &store,
                &state,
                LayerId::WaterPoints,
                Language::En
            ),
            Err(FilterError::Sink(SinkError::Rejected(_)))
        ));
    }
}
