//! Command surface used by a dashboard front end.
//!
//! Every state-changing command re-applies the affected layer immediately;
//! nothing here runs on its own.

use std::collections::BTreeSet;

use resolve_map_filter_models::{FilterCriterion, FilterField};
use resolve_map_survey_models::{FeatureStore, Language, LayerId, Theme};

use crate::FilterError;
use crate::driver::{ApplyOutcome, MapSink, apply_filters_for_layer};
use crate::extract::{FilterOption, filter_options, unique_values_for_theme};
use crate::state::FilterStateManager;

/// Loaded data, filter state and the map sink, driven by explicit commands.
pub struct FilterSession<S: MapSink> {
    store: FeatureStore,
    state: FilterStateManager,
    sink: S,
    language: Language,
}

impl<S: MapSink> FilterSession<S> {
    /// Creates a session over already-loaded data.
    #[must_use]
    pub fn new(store: FeatureStore, sink: S, language: Language) -> Self {
        Self {
            store,
            state: FilterStateManager::new(),
            sink,
            language,
        }
    }

    /// Current display language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The loaded features.
    #[must_use]
    pub const fn store(&self) -> &FeatureStore {
        &self.store
    }

    /// The filter state of every layer.
    #[must_use]
    pub const fn state(&self) -> &FilterStateManager {
        &self.state
    }

    /// The map sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session, returning the map sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Switches the display language.
    ///
    /// Stored selections are relabelled and every loaded layer with
    /// filtering enabled is re-applied against the same data.
    ///
    /// # Errors
    ///
    /// * If the map sink rejects an update
    pub fn set_language(&mut self, language: Language) -> Result<Vec<ApplyOutcome>, FilterError> {
        if language == self.language {
            return Ok(Vec::new());
        }
        log::info!("Switching display language to {language}");
        self.language = language;
        self.state.relabel_selections(language);

        let layers: Vec<LayerId> = self
            .store
            .loaded_layers()
            .into_iter()
            .filter(|layer| self.state.is_enabled(*layer))
            .collect();

        layers
            .into_iter()
            .map(|layer| self.on_filter_changed(layer))
            .collect()
    }

    /// Re-applies the filters of `layer`.
    ///
    /// # Errors
    ///
    /// * If no data is loaded for the layer
    /// * If the map sink rejects the update
    pub fn on_filter_changed(&mut self, layer: LayerId) -> Result<ApplyOutcome, FilterError> {
        apply_filters_for_layer(
            &mut self.sink,
            &self.store,
            &self.state,
            layer,
            self.language,
        )
    }

    /// Sets a criterion and re-applies the layer.
    ///
    /// # Errors
    ///
    /// * If the criterion is invalid for the layer
    /// * If no data is loaded for the layer
    /// * If the map sink rejects the update
    pub fn set_criterion(
        &mut self,
        layer: LayerId,
        field: FilterField,
        criterion: FilterCriterion,
    ) -> Result<ApplyOutcome, FilterError> {
        self.state.set_criterion(layer, field, criterion)?;
        self.on_filter_changed(layer)
    }

    /// Clears a criterion and re-applies the layer.
    ///
    /// # Errors
    ///
    /// * If no data is loaded for the layer
    /// * If the map sink rejects the update
    pub fn clear_criterion(
        &mut self,
        layer: LayerId,
        field: FilterField,
    ) -> Result<ApplyOutcome, FilterError> {
        self.state.clear_criterion(layer, field);
        self.on_filter_changed(layer)
    }

    /// Enables or disables filtering and re-applies the layer.
    ///
    /// # Errors
    ///
    /// * If no data is loaded for the layer
    /// * If the map sink rejects the update
    pub fn set_filter_enabled(
        &mut self,
        layer: LayerId,
        enabled: bool,
    ) -> Result<ApplyOutcome, FilterError> {
        self.state.set_enabled(layer, enabled);
        self.on_filter_changed(layer)
    }

    /// Shows or hides a layer and all of its derived sub-layers.
    ///
    /// Hiding resets the layer's filters and restores its full collection.
    /// A layer without data toggles visibility only.
    ///
    /// # Errors
    ///
    /// * If the map sink rejects an update
    pub fn toggle_layer(
        &mut self,
        layer: LayerId,
        visible: bool,
    ) -> Result<Option<ApplyOutcome>, FilterError> {
        for sub_layer in layer.sub_layer_ids() {
            self.sink.set_visibility(&sub_layer, visible)?;
        }
        self.state.on_layer_toggled(layer, visible);

        if visible || self.store.resolve(layer).is_none() {
            return Ok(None);
        }
        self.on_filter_changed(layer).map(Some)
    }

    /// Options of a multi-select field in the current language.
    ///
    /// # Errors
    ///
    /// * If the field is not filterable on the layer
    /// * If no data is loaded for the layer
    pub fn filter_options(
        &self,
        layer: LayerId,
        field: FilterField,
    ) -> Result<Vec<FilterOption>, FilterError> {
        filter_options(&self.store, layer, field, self.language)
    }

    /// Distinct labels of a theme property in the current language.
    ///
    /// # Errors
    ///
    /// * If the theme has not been loaded
    pub fn unique_values(
        &self,
        theme: Theme,
        candidates: &[&str],
    ) -> Result<BTreeSet<String>, FilterError> {
        unique_values_for_theme(&self.store, theme, candidates, self.language)
    }
}
