//! Per-layer filter state, owned in one place.

use std::collections::BTreeMap;

use resolve_map_filter_models::{ActiveFilters, FilterCriterion, FilterField, LayerFilterState};
use resolve_map_normalize::{classify, code_label};
use resolve_map_survey_models::{Language, LayerId};

use crate::FilterError;
use crate::predicate::ensure_kind;
use crate::rules::{Matcher, rule_for};

/// Holds the filter state of every layer.
///
/// Layers start with filtering disabled and no criteria.
#[derive(Debug, Clone, Default)]
pub struct FilterStateManager {
    layers: BTreeMap<LayerId, LayerFilterState>,
}

impl FilterStateManager {
    /// Creates a manager with no state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of `layer`, if it has ever been touched.
    #[must_use]
    pub fn state(&self, layer: LayerId) -> Option<&LayerFilterState> {
        self.layers.get(&layer)
    }

    fn state_mut(&mut self, layer: LayerId) -> &mut LayerFilterState {
        self.layers.entry(layer).or_default()
    }

    /// Sets a criterion on `layer`, replacing any previous one for the
    /// field. Inert criteria clear the field.
    ///
    /// # Errors
    ///
    /// * If the field is not filterable on the layer
    /// * If the criterion does not fit the field
    pub fn set_criterion(
        &mut self,
        layer: LayerId,
        field: FilterField,
        criterion: FilterCriterion,
    ) -> Result<(), FilterError> {
        rule_for(layer, field)?;
        ensure_kind(field, &criterion)?;
        self.state_mut(layer).filters.set(field, criterion);
        Ok(())
    }

    /// Removes the criterion on `field`.
    pub fn clear_criterion(&mut self, layer: LayerId, field: FilterField) {
        if let Some(state) = self.layers.get_mut(&layer) {
            state.filters.remove(field);
        }
    }

    /// Enables or disables filtering without touching stored criteria.
    pub fn set_enabled(&mut self, layer: LayerId, enabled: bool) {
        self.state_mut(layer).enabled = enabled;
    }

    /// Whether filtering is enabled for `layer`.
    #[must_use]
    pub fn is_enabled(&self, layer: LayerId) -> bool {
        self.layers.get(&layer).is_some_and(|state| state.enabled)
    }

    /// Handles the layer being shown or hidden.
    ///
    /// Hiding a layer disables its filtering and discards its criteria.
    pub fn on_layer_toggled(&mut self, layer: LayerId, visible: bool) {
        if visible {
            return;
        }
        if let Some(state) = self.layers.get_mut(&layer) {
            log::debug!("Resetting filters of hidden layer {layer}");
            state.enabled = false;
            state.filters.clear();
        }
    }

    /// Criteria stored for `layer`; empty when none were set.
    #[must_use]
    pub fn active_filters(&self, layer: LayerId) -> ActiveFilters {
        self.layers
            .get(&layer)
            .map(|state| state.filters.clone())
            .unwrap_or_default()
    }

    /// Rewrites stored multi-select labels into `language`.
    ///
    /// Selections that resolve to a known group are replaced by that
    /// group's label in the new language; anything else is kept verbatim.
    /// Matching goes through codes, so results do not change.
    pub fn relabel_selections(&mut self, language: Language) {
        for (layer, state) in &mut self.layers {
            let fields: Vec<FilterField> = state.filters.iter().map(|(field, _)| field).collect();

            for field in fields {
                let Ok(rule) = rule_for(*layer, field) else {
                    continue;
                };
                let Matcher::Category(category) = rule.matcher else {
                    continue;
                };
                let Some(FilterCriterion::MultiSelect { values }) = state.filters.get_mut(field)
                else {
                    continue;
                };

                *values = values
                    .iter()
                    .map(|selection| {
                        let normalized = classify(category, selection);
                        if normalized.is_known() {
                            code_label(category, &normalized.code, language)
                                .map_or_else(|| selection.clone(), str::to_string)
                        } else {
                            selection.clone()
                        }
                    })
                    .collect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolve_map_filter_models::FieldKind;

    #[test]
    fn layers_start_disabled() {
        let manager = FilterStateManager::new();
        assert!(!manager.is_enabled(LayerId::WaterPoints));
        assert!(manager.active_filters(LayerId::WaterPoints).is_empty());
    }

    #[test]
    fn disabling_keeps_criteria() {
        let mut manager = FilterStateManager::new();
        manager
            .set_criterion(
                LayerId::WaterPoints,
                FilterField::WaterSuff,
                FilterCriterion::multi_select(["Sufficient"]),
            )
            .unwrap();
        manager.set_enabled(LayerId::WaterPoints, true);
        manager.set_enabled(LayerId::WaterPoints, false);

        assert!(!manager.is_enabled(LayerId::WaterPoints));
        assert_eq!(manager.active_filters(LayerId::WaterPoints).len(), 1);
    }

    #[test]
    fn hiding_a_layer_resets_it() {
        let mut manager = FilterStateManager::new();
        manager
            .set_criterion(
                LayerId::FirePoints,
                FilterField::AcqTime,
                FilterCriterion::TimeRange {
                    start: Some(480),
                    end: None,
                },
            )
            .unwrap();
        manager.set_enabled(LayerId::FirePoints, true);

        manager.on_layer_toggled(LayerId::FirePoints, true);
        assert!(manager.is_enabled(LayerId::FirePoints));

        manager.on_layer_toggled(LayerId::FirePoints, false);
        assert!(!manager.is_enabled(LayerId::FirePoints));
        assert!(manager.active_filters(LayerId::FirePoints).is_empty());
    }

    #[test]
    fn rejects_invalid_criteria() {
        let mut manager = FilterStateManager::new();

        let err = manager
            .set_criterion(
                LayerId::WaterPoints,
                FilterField::Birds,
                FilterCriterion::NumberRange {
                    min: Some(1.0),
                    max: None,
                },
            )
            .unwrap_err();
        assert!(matches!(err, FilterError::UnknownField { .. }));

        let err = manager
            .set_criterion(
                LayerId::FoodPoints,
                FilterField::Birds,
                FilterCriterion::Flag { value: true },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            FilterError::KindMismatch {
                expected: FieldKind::NumberRange,
                found: FieldKind::Flag,
                ..
            }
        ));
    }

    #[test]
    fn relabels_known_selections_only() {
        let mut manager = FilterStateManager::new();
        manager
            .set_criterion(
                LayerId::WaterPoints,
                FilterField::WaterSuff,
                FilterCriterion::multi_select(["Sufficient", "something odd"]),
            )
            .unwrap();

        manager.relabel_selections(Language::Ar);

        let filters = manager.active_filters(LayerId::WaterPoints);
        let Some(FilterCriterion::MultiSelect { values }) = filters.get(FilterField::WaterSuff)
        else {
            panic!("expected a multi-select");
        };
        assert!(values.contains("كافي"));
        assert!(values.contains("something odd"));
        assert!(!values.contains("Sufficient"));
    }
}
