#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter fields, criteria and per-layer filter state.
//!
//! Field names serialize in camelCase (`waterSuff`, `villageNames`) so a
//! stored filter state reads the same as the dashboard's filter controls.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The shape of value a filter field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldKind {
    /// A set of selected labels or codes
    MultiSelect,
    /// Numeric min/max
    NumberRange,
    /// Month-of-year min/max (1-12)
    MonthRange,
    /// Calendar date min/max
    DateRange,
    /// Time-of-day min/max
    TimeRange,
    /// Presence test
    Flag,
    /// Yes/no answer
    YesNo,
    /// Free-text contains
    TextContains,
}

/// A filterable field on some layer.
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
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FilterField {
    // ── Any layer ────────────────────────────────────────────
    VillageNames,
    /// Latitude from the coordinate property, or from the point geometry
    /// when the feature has no such property. Only a feature with neither
    /// counts as missing, so a range can exclude features whose answers
    /// never mention a coordinate.
    Lat,
    /// Longitude, read the same way as [`Self::Lat`].
    Lon,
    Text,

    // ── Water ────────────────────────────────────────────────
    CropTypes,
    IrrigSource,
    WaterSuff,
    IrrigFreq,
    ScarcityMonths,

    // ── Energy ───────────────────────────────────────────────
    EnergySource,
    HasSolar,
    HasDiesel,
    PeakEnergy,

    // ── Food ─────────────────────────────────────────────────
    Production,
    TradProducts,
    MainCrops,
    HasAnimals,
    Birds,

    // ── General ──────────────────────────────────────────────
    FarmSize,
    SoilType,
    ClimateObserved,

    // ── Regenerative agriculture ─────────────────────────────
    FertilRel,
    PestMgmt,
    PesticRel,
    RegenPractices,

    // ── Fire detections ──────────────────────────────────────
    Daynight,
    AcqDate,
    AcqTime,

    // ── Protected areas ──────────────────────────────────────
    AreaNames,
    TypeCat,
    Area,

    // ── Farmer survey ────────────────────────────────────────
    FarmerVillage,
    FarmerCrops,
    FarmerFarmSize,
    FarmerSoilType,
    FarmerWaterSource,
    FarmerEnergySource,
    FarmerRegenPractices,
}

impl FilterField {
    /// The kind of criterion this field accepts.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Lat | Self::Lon | Self::PeakEnergy | Self::Birds | Self::Area => {
                FieldKind::NumberRange
            }
            Self::ScarcityMonths => FieldKind::MonthRange,
            Self::AcqDate => FieldKind::DateRange,
            Self::AcqTime => FieldKind::TimeRange,
            Self::HasSolar | Self::HasDiesel | Self::HasAnimals => FieldKind::Flag,
            Self::ClimateObserved | Self::FarmerRegenPractices => FieldKind::YesNo,
            Self::Text => FieldKind::TextContains,
            Self::VillageNames
            | Self::CropTypes
            | Self::IrrigSource
            | Self::WaterSuff
            | Self::IrrigFreq
            | Self::EnergySource
            | Self::Production
            | Self::TradProducts
            | Self::MainCrops
            | Self::FarmSize
            | Self::SoilType
            | Self::FertilRel
            | Self::PestMgmt
            | Self::PesticRel
            | Self::RegenPractices
            | Self::Daynight
            | Self::AreaNames
            | Self::TypeCat
            | Self::FarmerVillage
            | Self::FarmerCrops
            | Self::FarmerFarmSize
            | Self::FarmerSoilType
            | Self::FarmerWaterSource
            | Self::FarmerEnergySource => FieldKind::MultiSelect,
        }
    }
}

/// One active criterion on one field.
///
/// Range bounds are inclusive and optional; an absent bound is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterCriterion {
    /// Passes when the value matches any selected label or code.
    MultiSelect {
        /// Selected display labels (either language) or codes.
        values: BTreeSet<String>,
    },
    /// Passes when the first number in the value lies in range.
    NumberRange {
        /// Inclusive minimum.
        min: Option<f64>,
        /// Inclusive maximum.
        max: Option<f64>,
    },
    /// Passes when any month mentioned in the value lies in range.
    MonthRange {
        /// First month (1-12).
        start: Option<u8>,
        /// Last month (1-12).
        end: Option<u8>,
    },
    /// Passes when the value's calendar date lies in range.
    DateRange {
        /// Earliest date.
        start: Option<NaiveDate>,
        /// Latest date.
        end: Option<NaiveDate>,
    },
    /// Passes when the value's time of day lies in range.
    TimeRange {
        /// Earliest time, minutes since midnight.
        start: Option<u16>,
        /// Latest time, minutes since midnight.
        end: Option<u16>,
    },
    /// Passes when the field's presence test agrees with `value`.
    Flag {
        /// `true` requires presence, `false` requires absence.
        value: bool,
    },
    /// Passes when the yes/no answer agrees with `value`.
    YesNo {
        /// Required answer.
        value: bool,
    },
    /// Passes when any property value contains `text`.
    TextContains {
        /// Case-insensitive needle.
        text: String,
    },
}

impl FilterCriterion {
    /// Multi-select criterion over `values`.
    #[must_use]
    pub fn multi_select<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MultiSelect {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The kind of field this criterion applies to.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::MultiSelect { .. } => FieldKind::MultiSelect,
            Self::NumberRange { .. } => FieldKind::NumberRange,
            Self::MonthRange { .. } => FieldKind::MonthRange,
            Self::DateRange { .. } => FieldKind::DateRange,
            Self::TimeRange { .. } => FieldKind::TimeRange,
            Self::Flag { .. } => FieldKind::Flag,
            Self::YesNo { .. } => FieldKind::YesNo,
            Self::TextContains { .. } => FieldKind::TextContains,
        }
    }

    /// Whether this criterion constrains anything.
    ///
    /// Empty selections, fully open ranges and blank text are inert.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            Self::MultiSelect { values } => !values.is_empty(),
            Self::NumberRange { min, max } => min.is_some() || max.is_some(),
            Self::MonthRange { start, end } => start.is_some() || end.is_some(),
            Self::DateRange { start, end } => start.is_some() || end.is_some(),
            Self::TimeRange { start, end } => start.is_some() || end.is_some(),
            Self::Flag { .. } | Self::YesNo { .. } => true,
            Self::TextContains { text } => !text.trim().is_empty(),
        }
    }
}

/// Active criteria of one layer, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveFilters(BTreeMap<FilterField, FilterCriterion>);

impl ActiveFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the criterion for `field`, replacing any previous one.
    ///
    /// Inert criteria remove the field instead.
    pub fn set(&mut self, field: FilterField, criterion: FilterCriterion) {
        if criterion.is_active() {
            self.0.insert(field, criterion);
        } else {
            self.0.remove(&field);
        }
    }

    /// Removes the criterion for `field`.
    pub fn remove(&mut self, field: FilterField) -> Option<FilterCriterion> {
        self.0.remove(&field)
    }

    /// Criterion for `field`, if any.
    #[must_use]
    pub fn get(&self, field: FilterField) -> Option<&FilterCriterion> {
        self.0.get(&field)
    }

    /// Mutable criterion for `field`, if any.
    pub fn get_mut(&mut self, field: FilterField) -> Option<&mut FilterCriterion> {
        self.0.get_mut(&field)
    }

    /// Iterates over active criteria in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterField, &FilterCriterion)> {
        self.0.iter().map(|(field, criterion)| (*field, criterion))
    }

    /// Removes every criterion.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of criteria set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Filter state of one layer.
///
/// Disabling keeps the stored criteria; the layer simply shows its full
/// collection until filtering is enabled again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerFilterState {
    /// Whether the criteria are applied.
    pub enabled: bool,
    /// Stored criteria.
    #[serde(default)]
    pub filters: ActiveFilters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_are_camel_case() {
        assert_eq!(FilterField::WaterSuff.as_ref(), "waterSuff");
        assert_eq!(FilterField::VillageNames.to_string(), "villageNames");
        assert_eq!(
            "farmerRegenPractices".parse::<FilterField>().unwrap(),
            FilterField::FarmerRegenPractices
        );
        assert_eq!(FilterField::Daynight.as_ref(), "daynight");
    }

    #[test]
    fn inert_criteria_are_not_stored() {
        let mut filters = ActiveFilters::new();
        filters.set(
            FilterField::WaterSuff,
            FilterCriterion::multi_select(["Sufficient"]),
        );
        filters.set(
            FilterField::Birds,
            FilterCriterion::NumberRange {
                min: None,
                max: None,
            },
        );
        assert_eq!(filters.len(), 1);

        filters.set(
            FilterField::WaterSuff,
            FilterCriterion::multi_select(Vec::<String>::new()),
        );
        assert!(filters.is_empty());
    }

    #[test]
    fn criterion_kinds_line_up_with_fields() {
        assert_eq!(FilterField::AcqTime.kind(), FieldKind::TimeRange);
        assert_eq!(
            FilterCriterion::TimeRange {
                start: Some(480),
                end: None
            }
            .kind(),
            FieldKind::TimeRange
        );
        assert_eq!(FilterField::HasSolar.kind(), FieldKind::Flag);
        assert_eq!(FilterField::ClimateObserved.kind(), FieldKind::YesNo);
    }

    #[test]
    fn state_serializes_with_dashboard_names() {
        let mut state = LayerFilterState {
            enabled: true,
            ..LayerFilterState::default()
        };
        state.filters.set(
            FilterField::WaterSuff,
            FilterCriterion::multi_select(["كافي"]),
        );

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["enabled"], true);
        assert_eq!(json["filters"]["waterSuff"]["kind"], "multiSelect");
        assert_eq!(json["filters"]["waterSuff"]["values"][0], "كافي");

        let back: LayerFilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
