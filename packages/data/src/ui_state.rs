//! Dashboard UI state persisted between runs as a small JSON blob.
//!
//! Restoring never fails: a missing or corrupt blob yields the defaults, and
//! each field is read independently so one bad value does not discard the
//! rest.

use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use resolve_map_survey_models::{Language, LayerId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::LoadError;

/// Default map centre (longitude, latitude).
pub const DEFAULT_MAP_CENTER: [f64; 2] = [35.55, 33.69];

/// Default map zoom.
pub const DEFAULT_MAP_ZOOM: f64 = 12.0;

/// Persisted presentation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub language: Language,
    pub sidebar_collapsed: bool,
    pub map_center: [f64; 2],
    pub map_zoom: f64,
    pub visible_layers: BTreeSet<LayerId>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            language: Language::En,
            sidebar_collapsed: false,
            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            visible_layers: BTreeSet::new(),
        }
    }
}

impl UiState {
    /// Restores state from a JSON blob, keeping defaults for anything
    /// missing or unreadable. Unknown layer ids are skipped.
    #[must_use]
    pub fn restore(json: &str) -> Self {
        let mut state = Self::default();

        let parsed: Value = match serde_json::from_str(json) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to restore UI state: {e}");
                return state;
            }
        };

        if let Some(language) = parsed
            .get("language")
            .and_then(Value::as_str)
            .and_then(|s| Language::from_str(s).ok())
        {
            state.language = language;
        }
        if let Some(collapsed) = parsed.get("sidebarCollapsed").and_then(Value::as_bool) {
            state.sidebar_collapsed = collapsed;
        }
        if let Some(center) = parsed.get("mapCenter").and_then(Value::as_array) {
            if let [Some(lng), Some(lat)] = [
                center.first().and_then(Value::as_f64),
                center.get(1).and_then(Value::as_f64),
            ] {
                state.map_center = [lng, lat];
            }
        }
        if let Some(zoom) = parsed.get("mapZoom").and_then(Value::as_f64) {
            if zoom > 0.0 {
                state.map_zoom = zoom;
            }
        }
        if let Some(layers) = parsed.get("visibleLayers").and_then(Value::as_array) {
            state.visible_layers = layers
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|id| match LayerId::from_str(id) {
                    Ok(layer) => Some(layer),
                    Err(_) => {
                        log::debug!("Skipping unknown layer {id} in UI state");
                        None
                    }
                })
                .collect();
        }

        state
    }

    /// Serializes the state as a JSON blob.
    ///
    /// # Errors
    ///
    /// * If serialization fails
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Shows or hides `layer`.
    pub fn set_layer_visible(&mut self, layer: LayerId, visible: bool) {
        if visible {
            self.visible_layers.insert(layer);
        } else {
            self.visible_layers.remove(&layer);
        }
    }

    /// Reads state from `path`. Returns the defaults if the file is missing
    /// or unreadable.
    pub async fn load(path: &Path) -> Self {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Self::restore(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Failed to read UI state from {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Writes state to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// * If the file cannot be written
    pub async fn save(&self, path: &Path) -> Result<(), LoadError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, self.to_json()?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let mut state = UiState {
            language: Language::Ar,
            sidebar_collapsed: true,
            map_zoom: 9.5,
            ..UiState::default()
        };
        state.set_layer_visible(LayerId::WaterPoints, true);
        state.set_layer_visible(LayerId::FirePoints, true);

        let json = state.to_json().unwrap();
        assert!(json.contains("\"visibleLayers\":[\"water-points\",\"fire-points\"]"));
        assert_eq!(UiState::restore(&json), state);
    }

    #[test]
    fn corrupt_blob_yields_defaults() {
        assert_eq!(UiState::restore("{not json"), UiState::default());
        assert_eq!(UiState::restore("[]"), UiState::default());
    }

    #[test]
    fn bad_fields_do_not_discard_good_ones() {
        let state = UiState::restore(
            r#"{
                "language": "fr",
                "sidebarCollapsed": true,
                "mapCenter": [35.7],
                "mapZoom": 0,
                "visibleLayers": ["energy-points", "roads", 3]
            }"#,
        );
        assert_eq!(state.language, Language::En);
        assert!(state.sidebar_collapsed);
        assert_eq!(state.map_center, DEFAULT_MAP_CENTER);
        assert!((state.map_zoom - DEFAULT_MAP_ZOOM).abs() < f64::EPSILON);
        assert_eq!(
            state.visible_layers,
            BTreeSet::from([LayerId::EnergyPoints])
        );
    }

    #[test]
    fn hiding_a_layer_removes_it() {
        let mut state = UiState::default();
        state.set_layer_visible(LayerId::RegenPoints, true);
        state.set_layer_visible(LayerId::RegenPoints, false);
        assert!(state.visible_layers.is_empty());
    }

    #[tokio::test]
    async fn saves_and_loads_from_disk() {
        let dir = std::env::temp_dir().join(format!("resolve_map_ui_{}", std::process::id()));
        let path = dir.join("ui_state.json");

        assert_eq!(UiState::load(&path).await, UiState::default());

        let state = UiState {
            language: Language::Ar,
            ..UiState::default()
        };
        state.save(&path).await.unwrap();
        assert_eq!(UiState::load(&path).await, state);

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
