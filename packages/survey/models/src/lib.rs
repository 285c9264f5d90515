#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bilingual survey feature model.
//!
//! Survey features arrive in one of two shapes. Canonical features carry
//! parallel `properties.values.en` / `properties.values.ar` dictionaries
//! describing the same answers in both languages. Legacy features carry a
//! single flat, language-unaware `properties` dictionary. Both shapes are
//! represented by [`FeatureProperties`] and read through the same accessor,
//! so filter code never has to probe the raw JSON itself.

pub mod store;

use geojson::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

pub use store::{DataSource, FeatureStore, ResolvedLayer};

/// Display language of the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// Arabic
    Ar,
}

impl Language {
    /// Returns the other supported language.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::En, Self::Ar]
    }
}

/// A survey theme backing one canonical, filterable map layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    /// Irrigation sources, water sufficiency and scarcity
    Water,
    /// Energy sources and consumption for agriculture
    Energy,
    /// Production levels, traditional products and livestock
    Food,
    /// Respondent, farm size and soil information
    General,
    /// Regenerative agriculture practices
    Regen,
}

impl Theme {
    /// Returns the map layer this theme is rendered on.
    #[must_use]
    pub const fn layer_id(self) -> LayerId {
        match self {
            Self::Water => LayerId::WaterPoints,
            Self::Energy => LayerId::EnergyPoints,
            Self::Food => LayerId::FoodPoints,
            Self::General => LayerId::GeneralPoints,
            Self::Regen => LayerId::RegenPoints,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Water,
            Self::Energy,
            Self::Food,
            Self::General,
            Self::Regen,
        ]
    }
}

/// Identifier of a filterable map layer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LayerId {
    // ── Canonical bilingual themes ──────────────────────────
    /// Water theme points
    WaterPoints,
    /// Energy theme points
    EnergyPoints,
    /// Food theme points
    FoodPoints,
    /// General info theme points
    GeneralPoints,
    /// Regenerative agriculture theme points
    RegenPoints,

    // ── Legacy flat layers ──────────────────────────────────
    /// Satellite fire detections
    FirePoints,
    /// Protected area polygons
    PreservationsPoly,
    /// Comprehensive farmer survey (model predictions file)
    FarmersPoints,
}

impl LayerId {
    /// Returns the canonical theme backing this layer, if any.
    #[must_use]
    pub const fn theme(self) -> Option<Theme> {
        match self {
            Self::WaterPoints => Some(Theme::Water),
            Self::EnergyPoints => Some(Theme::Energy),
            Self::FoodPoints => Some(Theme::Food),
            Self::GeneralPoints => Some(Theme::General),
            Self::RegenPoints => Some(Theme::Regen),
            Self::FirePoints | Self::PreservationsPoly | Self::FarmersPoints => None,
        }
    }

    /// Whether overlapping points on this layer are fanned out before
    /// being handed to the map.
    #[must_use]
    pub const fn staggers_points(self) -> bool {
        matches!(self, Self::FarmersPoints)
    }

    /// Ids of every map sub-layer derived from this layer.
    #[must_use]
    pub fn sub_layer_ids(self) -> Vec<String> {
        let id = self.as_ref();
        vec![
            id.to_string(),
            format!("{id}-symbols"),
            format!("{id}-bubble"),
            format!("{id}-clusters"),
            format!("{id}-cluster-count"),
            format!("{id}-fill"),
            format!("{id}-outline"),
        ]
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::WaterPoints,
            Self::EnergyPoints,
            Self::FoodPoints,
            Self::GeneralPoints,
            Self::RegenPoints,
            Self::FirePoints,
            Self::PreservationsPoly,
            Self::FarmersPoints,
        ]
    }
}

/// Parallel per-language property dictionaries of a canonical feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BilingualValues {
    /// English display values keyed by property key.
    #[serde(default)]
    pub en: JsonObject,
    /// Arabic display values keyed by property key.
    #[serde(default)]
    pub ar: JsonObject,
}

impl BilingualValues {
    /// Returns the dictionary for `language`.
    #[must_use]
    pub const fn for_language(&self, language: Language) -> &JsonObject {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Properties of a survey feature, tagged by storage shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureProperties {
    /// `properties.values.{en,ar}` plus any other top-level properties.
    Canonical {
        /// The bilingual value dictionaries.
        values: BilingualValues,
        /// Remaining top-level properties (`featureId`, `source_row`, ...).
        extra: JsonObject,
    },
    /// A flat, language-unaware property dictionary.
    Legacy(JsonObject),
}

impl Default for FeatureProperties {
    fn default() -> Self {
        Self::Legacy(JsonObject::new())
    }
}

impl FeatureProperties {
    /// Classifies a raw `GeoJSON` properties object.
    ///
    /// Presence of an object-valued `values` member selects the canonical
    /// shape; anything else is treated as legacy.
    #[must_use]
    pub fn from_json_object(properties: Option<JsonObject>) -> Self {
        let Some(mut properties) = properties else {
            return Self::default();
        };

        match properties.remove("values") {
            Some(Value::Object(values)) => {
                let pick = |lang: &str| match values.get(lang) {
                    Some(Value::Object(map)) => map.clone(),
                    _ => JsonObject::new(),
                };
                Self::Canonical {
                    values: BilingualValues {
                        en: pick("en"),
                        ar: pick("ar"),
                    },
                    extra: properties,
                }
            }
            Some(other) => {
                properties.insert("values".to_string(), other);
                Self::Legacy(properties)
            }
            None => Self::Legacy(properties),
        }
    }

    /// Rebuilds the raw `GeoJSON` properties object.
    #[must_use]
    pub fn to_json_object(&self) -> JsonObject {
        match self {
            Self::Canonical { values, extra } => {
                let mut out = extra.clone();
                let mut by_lang = JsonObject::new();
                by_lang.insert("en".to_string(), Value::Object(values.en.clone()));
                by_lang.insert("ar".to_string(), Value::Object(values.ar.clone()));
                out.insert("values".to_string(), Value::Object(by_lang));
                out
            }
            Self::Legacy(map) => map.clone(),
        }
    }

    /// Whether these are canonical bilingual properties.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical { .. })
    }

    /// The property dictionary visible in `language`.
    ///
    /// Legacy properties ignore the language.
    #[must_use]
    pub const fn dictionary(&self, language: Language) -> &JsonObject {
        match self {
            Self::Canonical { values, .. } => values.for_language(language),
            Self::Legacy(map) => map,
        }
    }

    /// Languages worth inspecting when matching language-independently.
    ///
    /// Canonical features expose both languages (current first); legacy
    /// features have a single view.
    #[must_use]
    pub fn match_languages(&self, current: Language) -> Vec<Language> {
        if self.is_canonical() {
            vec![current, current.other()]
        } else {
            vec![current]
        }
    }

    /// Raw value of `key` in `language`.
    #[must_use]
    pub fn get(&self, key: &str, language: Language) -> Option<&Value> {
        self.dictionary(language).get(key)
    }

    /// First candidate key present in the `language` dictionary.
    ///
    /// Presence is enough: a key holding `null` still wins, so values from
    /// later candidates are never merged in.
    #[must_use]
    pub fn find_first_key<'a>(&self, candidates: &[&'a str], language: Language) -> Option<&'a str> {
        let dict = self.dictionary(language);
        candidates.iter().copied().find(|key| dict.contains_key(*key))
    }

    /// Top-level property outside the per-language dictionaries.
    #[must_use]
    pub fn top_level(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Canonical { extra, .. } => extra.get(key),
            Self::Legacy(map) => map.get(key),
        }
    }
}

/// Renders a raw property value as display text.
///
/// Returns `None` for `null`. Numbers and booleans are stringified; nested
/// arrays and objects fall back to their JSON text.
#[must_use]
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// A point or polygon survey feature.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyFeature {
    /// Top-level `GeoJSON` feature id, if the file carried one.
    pub id: Option<geojson::feature::Id>,
    /// Feature geometry.
    pub geometry: Option<geojson::Geometry>,
    /// Canonical or legacy properties.
    pub properties: FeatureProperties,
}

impl SurveyFeature {
    /// Stable identifier used for feature state and re-selection.
    ///
    /// Prefers `featureId`, then `source_row`, then the top-level id.
    #[must_use]
    pub fn stable_id(&self) -> Option<String> {
        ["featureId", "source_row"]
            .iter()
            .find_map(|key| self.properties.top_level(key).and_then(value_as_text))
            .or_else(|| {
                self.id.as_ref().map(|id| match id {
                    geojson::feature::Id::String(s) => s.clone(),
                    geojson::feature::Id::Number(n) => n.to_string(),
                })
            })
    }

    /// Point coordinates as `(lng, lat)`, if this is a point feature.
    #[must_use]
    pub fn point(&self) -> Option<(f64, f64)> {
        match &self.geometry.as_ref()?.value {
            geojson::Value::Point(coords) => match (coords.first(), coords.get(1)) {
                (Some(lng), Some(lat)) => Some((*lng, *lat)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Replaces the coordinates of a point feature. No-op otherwise.
    pub fn set_point(&mut self, lng: f64, lat: f64) {
        if let Some(geometry) = self.geometry.as_mut() {
            if matches!(geometry.value, geojson::Value::Point(_)) {
                geometry.value = geojson::Value::Point(vec![lng, lat]);
            }
        }
    }
}

impl From<geojson::Feature> for SurveyFeature {
    fn from(feature: geojson::Feature) -> Self {
        Self {
            id: feature.id,
            geometry: feature.geometry,
            properties: FeatureProperties::from_json_object(feature.properties),
        }
    }
}

impl From<&SurveyFeature> for geojson::Feature {
    fn from(feature: &SurveyFeature) -> Self {
        Self {
            bbox: None,
            geometry: feature.geometry.clone(),
            id: feature.id.clone(),
            properties: Some(feature.properties.to_json_object()),
            foreign_members: None,
        }
    }
}

/// Converts a parsed `FeatureCollection` into survey features.
#[must_use]
pub fn features_from_collection(collection: geojson::FeatureCollection) -> Vec<SurveyFeature> {
    collection
        .features
        .into_iter()
        .map(SurveyFeature::from)
        .collect()
}

/// Wraps survey features back into a `FeatureCollection`.
#[must_use]
pub fn to_feature_collection(features: &[SurveyFeature]) -> geojson::FeatureCollection {
    geojson::FeatureCollection {
        bbox: None,
        features: features.iter().map(geojson::Feature::from).collect(),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn values_member_selects_canonical_shape() {
        let props = FeatureProperties::from_json_object(Some(object(json!({
            "featureId": "w-1",
            "values": {
                "en": { "_7": "Sufficient" },
                "ar": { "_7": "كافي" }
            }
        }))));

        assert!(props.is_canonical());
        assert_eq!(props.get("_7", Language::En), Some(&json!("Sufficient")));
        assert_eq!(props.get("_7", Language::Ar), Some(&json!("كافي")));
        assert_eq!(props.top_level("featureId"), Some(&json!("w-1")));
    }

    #[test]
    fn flat_properties_select_legacy_shape() {
        let props = FeatureProperties::from_json_object(Some(object(json!({
            "NAME": "Shouf Biosphere",
            "REP_AREA": 550
        }))));

        assert!(!props.is_canonical());
        assert_eq!(
            props.get("NAME", Language::Ar),
            props.get("NAME", Language::En)
        );
    }

    #[test]
    fn non_object_values_member_stays_legacy() {
        let props =
            FeatureProperties::from_json_object(Some(object(json!({ "values": "n/a" }))));
        assert!(!props.is_canonical());
        assert_eq!(props.get("values", Language::En), Some(&json!("n/a")));
    }

    #[test]
    fn canonical_properties_rebuild_the_same_json() {
        let raw = object(json!({
            "source_row": 4,
            "values": { "en": { "X": 35.6 }, "ar": { "X": 35.6 } }
        }));
        let props = FeatureProperties::from_json_object(Some(raw.clone()));
        assert_eq!(props.to_json_object(), raw);
    }

    #[test]
    fn first_present_key_wins_even_when_null() {
        let props = FeatureProperties::from_json_object(Some(object(json!({
            "القرية": null,
            "Village": "Barouk"
        }))));
        assert_eq!(
            props.find_first_key(&["القرية", "Village"], Language::En),
            Some("القرية")
        );
    }

    #[test]
    fn stable_id_prefers_feature_id_then_source_row() {
        let feature = SurveyFeature {
            id: Some(geojson::feature::Id::String("top".to_string())),
            geometry: None,
            properties: FeatureProperties::from_json_object(Some(object(
                json!({ "source_row": 12 }),
            ))),
        };
        assert_eq!(feature.stable_id().as_deref(), Some("12"));

        let bare = SurveyFeature {
            properties: FeatureProperties::default(),
            ..feature
        };
        assert_eq!(bare.stable_id().as_deref(), Some("top"));
    }

    #[test]
    fn layer_ids_round_trip_through_strings() {
        for layer in LayerId::all() {
            let parsed: LayerId = layer.as_ref().parse().unwrap();
            assert_eq!(parsed, *layer);
        }
        assert_eq!(LayerId::PreservationsPoly.as_ref(), "preservations-poly");
        assert_eq!(Theme::Water.layer_id(), LayerId::WaterPoints);
        assert_eq!(LayerId::FirePoints.theme(), None);
    }

    #[test]
    fn sub_layers_cover_points_and_polygons() {
        let ids = LayerId::PreservationsPoly.sub_layer_ids();
        assert!(ids.contains(&"preservations-poly-fill".to_string()));
        assert!(ids.contains(&"preservations-poly-outline".to_string()));
        assert!(ids.contains(&"preservations-poly-symbols".to_string()));
    }
}
