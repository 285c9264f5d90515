//! Normalization categories and their group tables.

use resolve_map_survey_models::Language;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::tables;

/// One stable code within a category, with its bilingual labels and the
/// free-text aliases (in either language) that resolve to it.
///
/// Both labels are implicitly aliases too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Stable, language-independent snake_case code.
    pub code: &'static str,
    /// English display label.
    pub en: &'static str,
    /// Arabic display label.
    pub ar: &'static str,
    /// Additional strings resolving to this code.
    pub aliases: &'static [&'static str],
}

impl Group {
    /// Label in `language`.
    #[must_use]
    pub const fn label(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Ar => self.ar,
        }
    }

    /// Labels followed by aliases.
    pub fn match_strings(&self) -> impl Iterator<Item = &'static str> {
        [self.en, self.ar].into_iter().chain(self.aliases.iter().copied())
    }
}

/// A filter category with its own code table.
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
pub enum Category {
    /// Village / locality names
    Village,
    /// Individual crop types
    CropType,
    /// How often crops are irrigated
    IrrigationFrequency,
    /// Main irrigation water source
    WaterSource,
    /// Water availability during the growing season
    WaterSufficiency,
    /// Main energy source for irrigation and farm work
    EnergySource,
    /// Production level
    ProductionLevel,
    /// Main traditional food products
    TraditionalProduct,
    /// Size of the farm holding
    FarmSize,
    /// Soil type
    SoilType,
    /// Reliance on chemical fertilizers
    FertilizerReliance,
    /// Reliance on chemical pesticides
    PesticideReliance,
    /// Pest control method
    PestControl,
    /// Regenerative agriculture practices
    RegenPractice,
    /// Protected area names
    ProtectedAreaName,
    /// Protected area designation / type
    ProtectedAreaType,
    /// Day or night fire detection
    DayNight,
    /// No table; values normalize through the fallback only
    Generic,
}

impl Category {
    /// The group table of this category.
    #[must_use]
    pub fn groups(self) -> &'static [Group] {
        match self {
            Self::Village => tables::VILLAGES,
            Self::CropType => tables::CROPS,
            Self::IrrigationFrequency => tables::IRRIGATION_FREQUENCY,
            Self::WaterSource => tables::WATER_SOURCES,
            Self::WaterSufficiency => tables::WATER_SUFFICIENCY,
            Self::EnergySource => tables::ENERGY_SOURCES,
            Self::ProductionLevel => tables::PRODUCTION_LEVELS,
            Self::TraditionalProduct => tables::TRADITIONAL_PRODUCTS,
            Self::FarmSize => tables::FARM_SIZES,
            Self::SoilType => tables::SOIL_TYPES,
            Self::FertilizerReliance | Self::PesticideReliance => tables::DEPENDENCY,
            Self::PestControl => tables::PEST_CONTROL,
            Self::RegenPractice => tables::REGEN_PRACTICES,
            Self::ProtectedAreaName => tables::PROTECTED_AREA_NAMES,
            Self::ProtectedAreaType => tables::PROTECTED_AREA_TYPES,
            Self::DayNight => tables::DAY_NIGHT,
            Self::Generic => &[],
        }
    }

    /// Looks up the group carrying `code`.
    #[must_use]
    pub fn group(self, code: &str) -> Option<&'static Group> {
        self.groups().iter().find(|group| group.code == code)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Village,
            Self::CropType,
            Self::IrrigationFrequency,
            Self::WaterSource,
            Self::WaterSufficiency,
            Self::EnergySource,
            Self::ProductionLevel,
            Self::TraditionalProduct,
            Self::FarmSize,
            Self::SoilType,
            Self::FertilizerReliance,
            Self::PesticideReliance,
            Self::PestControl,
            Self::RegenPractice,
            Self::ProtectedAreaName,
            Self::ProtectedAreaType,
            Self::DayNight,
            Self::Generic,
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn is_arabic(s: &str) -> bool {
        s.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
    }

    fn is_latin(s: &str) -> bool {
        s.chars().any(|c| c.is_ascii_alphabetic())
    }

    #[test]
    fn every_code_is_reachable_from_both_languages() {
        for category in Category::all() {
            for group in category.groups() {
                assert!(
                    group.match_strings().any(is_arabic),
                    "{category}/{} has no Arabic string",
                    group.code
                );
                assert!(
                    group.match_strings().any(is_latin),
                    "{category}/{} has no English string",
                    group.code
                );
                assert!(is_arabic(group.ar), "{category}/{} ar label", group.code);
                assert!(is_latin(group.en), "{category}/{} en label", group.code);
            }
        }
    }

    #[test]
    fn codes_are_unique_snake_case() {
        for category in Category::all() {
            let mut seen = BTreeSet::new();
            for group in category.groups() {
                assert!(
                    seen.insert(group.code),
                    "{category} repeats code {}",
                    group.code
                );
                assert!(
                    group
                        .code
                        .chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                    "{category} code {} is not snake_case",
                    group.code
                );
            }
        }
    }

    #[test]
    fn generic_has_no_table() {
        assert!(Category::Generic.groups().is_empty());
        assert_eq!(
            Category::FertilizerReliance.groups(),
            Category::PesticideReliance.groups()
        );
    }

    #[test]
    fn category_names_parse() {
        assert_eq!("waterSource".parse::<Category>().unwrap(), Category::WaterSource);
        assert_eq!(Category::DayNight.as_ref(), "dayNight");
        assert!("weather".parse::<Category>().is_err());
    }
}
