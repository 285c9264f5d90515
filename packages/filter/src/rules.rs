//! Per-layer field rules.
//!
//! Each filterable field on a layer names the property keys its value may
//! live under (numbered canonical keys, raw Arabic question text and
//! English question text all appear across the survey files) and how the
//! value is judged. Keys are probed in order and the first one present on a
//! feature wins.

#![allow(clippy::too_many_lines)]

use std::collections::BTreeMap;
use std::sync::LazyLock;

use resolve_map_filter_models::{FieldKind, FilterField};
use resolve_map_normalize::Category;
use resolve_map_survey_models::LayerId;

use crate::FilterError;

/// Where a field's value is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// The first key present on the feature.
    FirstOf(&'static [&'static str]),
    /// Every key present on the feature; any of them may match.
    AnyOf(&'static [&'static str]),
    /// The first key whose value parses as a number.
    FirstNumeric(&'static [&'static str]),
    /// The first key present, falling back to the point geometry.
    Coordinate {
        /// Property keys holding the coordinate.
        keys: &'static [&'static str],
        /// Which geometry axis to fall back to.
        axis: Axis,
    },
    /// Every value of the feature.
    AllValues,
}

impl ValueSource {
    /// Property keys this source probes.
    #[must_use]
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::FirstOf(keys)
            | Self::AnyOf(keys)
            | Self::FirstNumeric(keys)
            | Self::Coordinate { keys, .. } => keys,
            Self::AllValues => &[],
        }
    }
}

/// Geometry axis of a coordinate field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Latitude (`y`)
    Lat,
    /// Longitude (`x`)
    Lon,
}

/// Presence tests behind flag fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Mentions solar power
    Solar,
    /// Mentions diesel, fuel oil or a generator
    Diesel,
    /// Carries an answer other than "no"
    Answered,
}

/// How a field's value is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Normalized against a category table
    Category(Category),
    /// First number in the text
    Number,
    /// Months mentioned in the text
    Months,
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Presence test
    Presence(Presence),
    /// Yes/no answer
    YesNo,
    /// Case-insensitive substring
    Text,
}

impl Matcher {
    /// The criterion kind this matcher evaluates.
    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Category(_) => FieldKind::MultiSelect,
            Self::Number => FieldKind::NumberRange,
            Self::Months => FieldKind::MonthRange,
            Self::Date => FieldKind::DateRange,
            Self::Time => FieldKind::TimeRange,
            Self::Presence(_) => FieldKind::Flag,
            Self::YesNo => FieldKind::YesNo,
            Self::Text => FieldKind::TextContains,
        }
    }
}

/// One filterable field on one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// The filter field.
    pub field: FilterField,
    /// Where its value is read from.
    pub source: ValueSource,
    /// How the value is judged.
    pub matcher: Matcher,
}

const fn rule(field: FilterField, source: ValueSource, matcher: Matcher) -> FieldRule {
    FieldRule {
        field,
        source,
        matcher,
    }
}

const VILLAGE_KEYS: &[&str] = &[
    "القرية",
    "القرية:",
    "4.القرية:",
    "4.القرية",
    "4. Village",
    "Village",
    "Village_Name",
];

const LAT_KEYS: &[&str] = &["Y", "y", "Latitude", "LATITUDE", "latitude", "lat"];

const LON_KEYS: &[&str] = &[
    "X",
    "x",
    "Longitude",
    "LONGITUDE",
    "longitude",
    "lng",
    "lon",
];

const ENERGY_SOURCE_KEYS: &[&str] = &[
    "_3",
    "مصدر الطاقة الرئيسي",
    "14. Energy Source",
    "14.ما هو مصدر الطاقة الرئيسي الذي تستخدمه للري والعمليات الزراعية؟",
];

static COMMON: &[FieldRule] = &[
    rule(
        FilterField::VillageNames,
        ValueSource::FirstOf(VILLAGE_KEYS),
        Matcher::Category(Category::Village),
    ),
    rule(
        FilterField::Lat,
        ValueSource::Coordinate {
            keys: LAT_KEYS,
            axis: Axis::Lat,
        },
        Matcher::Number,
    ),
    rule(
        FilterField::Lon,
        ValueSource::Coordinate {
            keys: LON_KEYS,
            axis: Axis::Lon,
        },
        Matcher::Number,
    ),
    rule(FilterField::Text, ValueSource::AllValues, Matcher::Text),
];

static WATER: &[FieldRule] = &[
    rule(
        FilterField::CropTypes,
        ValueSource::FirstOf(&[
            "المحصول",
            "_3",
            "10. Main Crops",
            "10.ما هما المحصولان الرئيسيان اللذان تزرعهما خلال السنة (حسب المساحة أو الدخل)؟",
        ]),
        Matcher::Category(Category::CropType),
    ),
    rule(
        FilterField::IrrigSource,
        ValueSource::FirstOf(&[
            "_6",
            "مصدر مياه الريّ الرئيسي",
            "13. Water Source",
            "13.ما هو المصدر الرئيسي للمياه المستخدمة في الري؟",
        ]),
        Matcher::Category(Category::WaterSource),
    ),
    rule(
        FilterField::WaterSuff,
        ValueSource::FirstOf(&[
            "_7",
            "توفر المياه",
            "16. Water Availability",
            "16.كيف تقيّم توفر المياه خلال موسم الزراعة؟",
        ]),
        Matcher::Category(Category::WaterSufficiency),
    ),
    rule(
        FilterField::IrrigFreq,
        ValueSource::AnyOf(&["_5", "ريّ المحصول", "ريّ المحصول 1", "ريّ المحصول 2"]),
        Matcher::Category(Category::IrrigationFrequency),
    ),
    rule(
        FilterField::ScarcityMonths,
        ValueSource::FirstOf(&[
            "_8",
            " أشهر شح المياه",
            "أشهر شح المياه",
            "17. Water Scarcity Months",
            "ما أشهر  الذي  تعاني فيها من شح المياه؟",
        ]),
        Matcher::Months,
    ),
];

static ENERGY: &[FieldRule] = &[
    rule(
        FilterField::EnergySource,
        ValueSource::FirstOf(ENERGY_SOURCE_KEYS),
        Matcher::Category(Category::EnergySource),
    ),
    rule(
        FilterField::HasSolar,
        ValueSource::FirstOf(ENERGY_SOURCE_KEYS),
        Matcher::Presence(Presence::Solar),
    ),
    rule(
        FilterField::HasDiesel,
        ValueSource::FirstOf(ENERGY_SOURCE_KEYS),
        Matcher::Presence(Presence::Diesel),
    ),
    rule(
        FilterField::PeakEnergy,
        ValueSource::FirstOf(&[
            "_4",
            "كمية الطاقة المستخدمة خلال موسم الذروة ",
            "كمية الطاقة المستخدمة خلال موسم الذروة",
        ]),
        Matcher::Number,
    ),
];

static FOOD: &[FieldRule] = &[
    rule(
        FilterField::Production,
        ValueSource::FirstOf(&["_5", "مستوى الانتاج"]),
        Matcher::Category(Category::ProductionLevel),
    ),
    rule(
        FilterField::TradProducts,
        ValueSource::FirstOf(&[
            "_6",
            "المنتجات التقليدية الرئيسية",
            "المتنجات التقليدية الرئيسية",
        ]),
        Matcher::Category(Category::TraditionalProduct),
    ),
    rule(
        FilterField::MainCrops,
        ValueSource::FirstOf(&[
            "_3",
            "المحصولين الرئيسيين",
            " المحصول الاول والمحصول الثاني",
        ]),
        Matcher::Category(Category::CropType),
    ),
    rule(
        FilterField::HasAnimals,
        ValueSource::FirstOf(&["_8", "انواع الحيوانات:", "انواع الحيوانات"]),
        Matcher::Presence(Presence::Answered),
    ),
    rule(
        FilterField::Birds,
        ValueSource::FirstOf(&["_9", "عدد الطيور"]),
        Matcher::Number,
    ),
];

static GENERAL: &[FieldRule] = &[
    rule(
        FilterField::FarmSize,
        ValueSource::FirstOf(&[
            "_3",
            "حجم الزراعة",
            "8. Farm Size",
            "8.ما هو حجم الحيازة الزراعية الخاصة بك؟",
        ]),
        Matcher::Category(Category::FarmSize),
    ),
    rule(
        FilterField::SoilType,
        ValueSource::FirstOf(&[
            "_4",
            "نوع التربة",
            "9. Soil Type",
            "9.ما هو نوع التربة في أرضك؟",
        ]),
        Matcher::Category(Category::SoilType),
    ),
    rule(
        FilterField::ClimateObserved,
        ValueSource::FirstOf(&[
            "_5",
            "ملاحظة تغيرات مناخية",
            "ملاحظة تغيرات مناخية على الزراعة",
        ]),
        Matcher::YesNo,
    ),
];

static REGEN: &[FieldRule] = &[
    rule(
        FilterField::FertilRel,
        ValueSource::FirstOf(&["_5", "الاعتماد على الاسمدة الكيميائية"]),
        Matcher::Category(Category::FertilizerReliance),
    ),
    rule(
        FilterField::PestMgmt,
        ValueSource::FirstOf(&["_6", "مكافحة الآفات"]),
        Matcher::Category(Category::PestControl),
    ),
    rule(
        FilterField::PesticRel,
        ValueSource::FirstOf(&["_7", "الاعتماد على المبيدات الكيميائية"]),
        Matcher::Category(Category::PesticideReliance),
    ),
    rule(
        FilterField::RegenPractices,
        ValueSource::FirstOf(&["_3", "تقنيات الزراعة التجديدية"]),
        Matcher::Category(Category::RegenPractice),
    ),
];

static FIRE: &[FieldRule] = &[
    rule(
        FilterField::Daynight,
        ValueSource::FirstOf(&["Day\\Night", "Day/Night", "DAYNIGHT", "daynight"]),
        Matcher::Category(Category::DayNight),
    ),
    rule(
        FilterField::AcqDate,
        ValueSource::FirstOf(&["ACQ_DATE", "acq_date", "date"]),
        Matcher::Date,
    ),
    rule(
        FilterField::AcqTime,
        ValueSource::FirstOf(&["acqtime", "ACQ_TIME", "acq_time"]),
        Matcher::Time,
    ),
];

static PRESERVATIONS: &[FieldRule] = &[
    rule(
        FilterField::AreaNames,
        ValueSource::FirstOf(&["NAME", "ORIG_NAME"]),
        Matcher::Category(Category::ProtectedAreaName),
    ),
    rule(
        FilterField::TypeCat,
        ValueSource::AnyOf(&["DESIG", "DESIG_TYPE", "GOV_TYPE"]),
        Matcher::Category(Category::ProtectedAreaType),
    ),
    rule(
        FilterField::Area,
        ValueSource::FirstNumeric(&["REP_AREA", "GIS_AREA"]),
        Matcher::Number,
    ),
];

static FARMERS: &[FieldRule] = &[
    rule(
        FilterField::FarmerVillage,
        ValueSource::FirstOf(&["4.القرية:", "القرية", "Village_Name"]),
        Matcher::Category(Category::Village),
    ),
    rule(
        FilterField::FarmerCrops,
        ValueSource::FirstOf(&[
            "10.ما هما المحصولان الرئيسيان اللذان تزرعهما خلال السنة (حسب المساحة أو الدخل)؟",
        ]),
        Matcher::Category(Category::CropType),
    ),
    rule(
        FilterField::FarmerFarmSize,
        ValueSource::FirstOf(&["8.ما هو حجم الحيازة الزراعية الخاصة بك؟"]),
        Matcher::Category(Category::FarmSize),
    ),
    rule(
        FilterField::FarmerSoilType,
        ValueSource::FirstOf(&["9.ما هو نوع التربة في أرضك؟"]),
        Matcher::Category(Category::SoilType),
    ),
    rule(
        FilterField::FarmerWaterSource,
        ValueSource::FirstOf(&["13.ما هو المصدر الرئيسي للمياه المستخدمة في الري؟"]),
        Matcher::Category(Category::WaterSource),
    ),
    rule(
        FilterField::FarmerEnergySource,
        ValueSource::FirstOf(&[
            "14.ما هو مصدر الطاقة الرئيسي الذي تستخدمه للري والعمليات الزراعية؟",
        ]),
        Matcher::Category(Category::EnergySource),
    ),
    rule(
        FilterField::FarmerRegenPractices,
        ValueSource::FirstOf(&["32.هل تمارس الزراعة التجديدية؟", "Practices_Regen"]),
        Matcher::YesNo,
    ),
];

fn layer_rules(layer: LayerId) -> &'static [FieldRule] {
    match layer {
        LayerId::WaterPoints => WATER,
        LayerId::EnergyPoints => ENERGY,
        LayerId::FoodPoints => FOOD,
        LayerId::GeneralPoints => GENERAL,
        LayerId::RegenPoints => REGEN,
        LayerId::FirePoints => FIRE,
        LayerId::PreservationsPoly => PRESERVATIONS,
        LayerId::FarmersPoints => FARMERS,
    }
}

/// Every rule available on `layer`, common fields first.
pub fn rules_for(layer: LayerId) -> impl Iterator<Item = &'static FieldRule> {
    COMMON.iter().chain(layer_rules(layer))
}

/// The rule for `field` on `layer`.
///
/// # Errors
///
/// * If `field` is not filterable on `layer`
pub fn rule_for(layer: LayerId, field: FilterField) -> Result<&'static FieldRule, FilterError> {
    rules_for(layer)
        .find(|rule| rule.field == field)
        .ok_or(FilterError::UnknownField { layer, field })
}

/// Property key → category, per layer, built from the multi-select rules.
static CATEGORY_INDEX: LazyLock<BTreeMap<LayerId, BTreeMap<&'static str, Category>>> =
    LazyLock::new(|| {
        LayerId::all()
            .iter()
            .map(|layer| {
                let mut keys = BTreeMap::new();
                for rule in rules_for(*layer) {
                    let Matcher::Category(category) = rule.matcher else {
                        continue;
                    };
                    for key in rule.source.keys() {
                        if let Some(existing) = keys.insert(*key, category) {
                            if existing != category {
                                log::warn!(
                                    "Property {key:?} on {layer} maps to both {existing} and {category}"
                                );
                            }
                        }
                    }
                }
                (*layer, keys)
            })
            .collect()
    });

/// Category of a property key on `layer`, if any multi-select field reads it.
#[must_use]
pub fn category_for_property(layer: LayerId, key: &str) -> Option<Category> {
    CATEGORY_INDEX.get(&layer)?.get(key).copied()
}

/// Category of the first candidate key that has one, falling back to
/// [`Category::Generic`].
#[must_use]
pub fn category_for_candidates(layer: LayerId, candidates: &[&str]) -> Category {
    candidates
        .iter()
        .find_map(|key| category_for_property(layer, key))
        .unwrap_or_else(|| {
            log::debug!("No category for {candidates:?} on {layer}, using fallback only");
            Category::Generic
        })
}

/// Checks every rule table for internal consistency.
///
/// # Errors
///
/// * If a rule's matcher does not evaluate its field's kind
/// * If a field appears twice on one layer
/// * If a keyed source lists no keys
/// * If one property key maps to two categories on one layer
pub fn validate() -> Result<(), FilterError> {
    for layer in LayerId::all() {
        let mut seen = Vec::new();
        let mut categories: BTreeMap<&str, Category> = BTreeMap::new();

        for rule in rules_for(*layer) {
            let invalid = |reason: &str| FilterError::InvalidRule {
                layer: *layer,
                field: rule.field,
                reason: reason.to_string(),
            };

            if rule.matcher.kind() != rule.field.kind() {
                return Err(invalid("matcher does not evaluate the field's kind"));
            }
            if seen.contains(&rule.field) {
                return Err(invalid("field listed twice"));
            }
            seen.push(rule.field);

            if rule.source != ValueSource::AllValues && rule.source.keys().is_empty() {
                return Err(invalid("no property keys"));
            }

            if let Matcher::Category(category) = rule.matcher {
                for key in rule.source.keys() {
                    match categories.insert(key, category) {
                        Some(existing) if existing != category => {
                            return Err(invalid("property key maps to two categories"));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_tables_are_consistent() {
        validate().unwrap();
    }

    #[test]
    fn every_multi_select_key_has_a_category() {
        for layer in LayerId::all() {
            for rule in rules_for(*layer) {
                if rule.field.kind() != FieldKind::MultiSelect {
                    continue;
                }
                for key in rule.source.keys() {
                    assert!(
                        category_for_property(*layer, key).is_some(),
                        "{layer}/{} key {key:?} has no category",
                        rule.field
                    );
                }
            }
        }
    }

    #[test]
    fn common_fields_exist_on_every_layer() {
        for layer in LayerId::all() {
            for field in [FilterField::VillageNames, FilterField::Lat, FilterField::Lon] {
                assert!(rule_for(*layer, field).is_ok(), "{layer} lacks {field}");
            }
        }
    }

    #[test]
    fn layer_specific_fields_stay_on_their_layer() {
        assert!(rule_for(LayerId::WaterPoints, FilterField::WaterSuff).is_ok());
        assert!(matches!(
            rule_for(LayerId::EnergyPoints, FilterField::WaterSuff),
            Err(FilterError::UnknownField { .. })
        ));
    }

    #[test]
    fn candidates_resolve_to_categories() {
        assert_eq!(
            category_for_candidates(LayerId::WaterPoints, &["missing", "_7"]),
            Category::WaterSufficiency
        );
        assert_eq!(
            category_for_candidates(LayerId::EnergyPoints, &["_7"]),
            Category::Generic
        );
        assert_eq!(
            category_for_property(LayerId::PreservationsPoly, "GOV_TYPE"),
            Some(Category::ProtectedAreaType)
        );
    }
}
