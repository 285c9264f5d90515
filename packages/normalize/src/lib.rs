#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bilingual value normalization.
//!
//! Maps free-text survey answers in Arabic or English onto stable,
//! language-independent codes using one table per [`Category`]. The same
//! fact answered in either language resolves to the same code, which is
//! what makes filtering independent of the display language.
//!
//! Classification runs in priority order:
//!
//! 1. Exact match against a label or alias
//! 2. Case-insensitive (folded) match
//! 3. The value contains an alias (longest alias wins)
//! 4. An alias contains the value (values of four or more characters)
//! 5. Fallback: the sanitized value itself
//!
//! [`classify`] picks one code per value. Filtering goes through
//! [`value_codes`] instead, which keeps every group an answer names.

pub mod category;
pub mod schema;
pub mod tables;
pub mod text;

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Range;
use std::sync::LazyLock;

use resolve_map_survey_models::Language;

pub use category::{Category, Group};
pub use text::clean_text;

/// Minimum folded length for a value to be looked up inside aliases.
const MIN_CONTAINED_CHARS: usize = 4;

/// How a value was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Equal to a label or alias
    Exact,
    /// Equal after case and diacritic folding
    CaseInsensitive,
    /// The value contains an alias
    Contains,
    /// An alias contains the value
    ContainedIn,
    /// No table entry; sanitized value
    Fallback,
}

/// Result of classifying a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// Stable code.
    pub code: String,
    /// How the code was found.
    pub kind: MatchKind,
}

impl Normalized {
    /// Whether the code came from the category table.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.kind != MatchKind::Fallback
    }
}

struct Alias {
    raw: &'static str,
    folded: String,
    chars: usize,
    group: &'static Group,
}

/// Folded aliases of every category, built once.
static ALIASES: LazyLock<BTreeMap<Category, Vec<Alias>>> = LazyLock::new(|| {
    Category::all()
        .iter()
        .map(|category| {
            let aliases = category
                .groups()
                .iter()
                .flat_map(|group| {
                    group.match_strings().map(move |raw| {
                        let folded = text::fold(raw);
                        Alias {
                            raw,
                            chars: folded.chars().count(),
                            folded,
                            group,
                        }
                    })
                })
                .collect();
            (*category, aliases)
        })
        .collect()
});

fn aliases(category: Category) -> &'static [Alias] {
    ALIASES
        .get(&category)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Parses a category name, falling back to [`Category::Generic`].
#[must_use]
pub fn parse_category(name: &str) -> Category {
    name.parse().unwrap_or_else(|_| {
        log::debug!("Unknown normalization category {name:?}, using fallback only");
        Category::Generic
    })
}

/// Classifies a single (non-composite) display value.
///
/// The value is cleaned first, so `"4.القرية: الباروك"` and `"Barouk"`
/// resolve to the same code.
#[must_use]
pub fn classify(category: Category, value: &str) -> Normalized {
    let cleaned = clean_text(value);

    if let Some(group) = lookup(category, &cleaned) {
        return group;
    }

    let code = text::sanitize(&cleaned);
    log::debug!("No {category} match for {cleaned:?}, falling back to {code:?}");
    Normalized {
        code,
        kind: MatchKind::Fallback,
    }
}

fn lookup(category: Category, cleaned: &str) -> Option<Normalized> {
    let aliases = aliases(category);
    if aliases.is_empty() || cleaned.is_empty() {
        return None;
    }

    let found = |alias: &Alias, kind| Normalized {
        code: alias.group.code.to_string(),
        kind,
    };

    if let Some(alias) = aliases.iter().find(|alias| alias.raw == cleaned) {
        return Some(found(alias, MatchKind::Exact));
    }

    let folded = text::fold(cleaned);

    if let Some(alias) = aliases.iter().find(|alias| alias.folded == folded) {
        return Some(found(alias, MatchKind::CaseInsensitive));
    }

    let mut longest: Option<&Alias> = None;
    for alias in aliases {
        if text::contains_folded(&folded, &alias.folded)
            && longest.is_none_or(|best| alias.chars > best.chars)
        {
            longest = Some(alias);
        }
    }
    if let Some(alias) = longest {
        return Some(found(alias, MatchKind::Contains));
    }

    if folded.chars().count() >= MIN_CONTAINED_CHARS {
        let mut shortest: Option<&Alias> = None;
        for alias in aliases {
            if alias.folded.contains(&folded)
                && shortest.is_none_or(|best| alias.chars < best.chars)
            {
                shortest = Some(alias);
            }
        }
        if let Some(alias) = shortest {
            return Some(found(alias, MatchKind::ContainedIn));
        }
    }

    None
}

/// Normalizes a display value to its stable code.
#[must_use]
pub fn normalize(category: Category, value: &str) -> String {
    classify(category, value).code
}

/// Every code a raw answer stands for.
///
/// A composite answer (`"Apple, Tomato"`) yields the codes of each item,
/// and each item yields every code named in it (see [`segment_codes`]).
/// Empty answers yield nothing.
#[must_use]
pub fn value_codes(category: Category, value: &str) -> BTreeSet<String> {
    let cleaned = clean_text(value);

    text::split_composite(&cleaned)
        .into_iter()
        .flat_map(|segment| segment_codes(category, segment))
        .filter(|code| !code.is_empty())
        .collect()
}

/// Codes of every group named in one item of an answer.
///
/// `"Solar panels and diesel generator"` names both `solar` and
/// `generator`. An alias found only inside a longer matched alias does not
/// count (`"Insufficient"` is not also `sufficient`), and of two groups
/// sharing an alias the earlier one wins. Items naming no alias fall back
/// to [`classify`].
#[must_use]
pub fn segment_codes(category: Category, segment: &str) -> BTreeSet<String> {
    let folded = text::fold(&clean_text(segment));

    let hits: Vec<(Range<usize>, &Alias)> = aliases(category)
        .iter()
        .flat_map(|alias| {
            text::find_folded(&folded, &alias.folded)
                .into_iter()
                .map(move |span| (span, alias))
        })
        .collect();

    let codes: BTreeSet<String> = hits
        .iter()
        .enumerate()
        .filter(|(i, (span, alias))| {
            !hits.iter().enumerate().any(|(j, (other, other_alias))| {
                covers(other, span)
                    || (j < *i && other == span && other_alias.group.code != alias.group.code)
            })
        })
        .map(|(_, (_, alias))| alias.group.code.to_string())
        .collect();

    if codes.is_empty() {
        return BTreeSet::from([normalize(category, segment)]);
    }
    codes
}

/// Whether `outer` strictly contains `inner`.
fn covers(outer: &Range<usize>, inner: &Range<usize>) -> bool {
    outer.start <= inner.start && inner.end <= outer.end && outer.len() > inner.len()
}

/// Whether a raw answer resolves to `code`, honouring composite answers.
#[must_use]
pub fn matches_code(category: Category, value: &str, code: &str) -> bool {
    value_codes(category, value).contains(code)
}

/// Label of `code` in `language`, if the code is in the table.
#[must_use]
pub fn code_label(category: Category, code: &str, language: Language) -> Option<&'static str> {
    category.group(code).map(|group| group.label(language))
}

/// Display label for a raw answer.
///
/// Known values show their group label in `language`; unknown values show
/// their cleaned text.
#[must_use]
pub fn display_label(category: Category, value: &str, language: Language) -> String {
    let normalized = classify(category, value);
    if normalized.is_known() {
        if let Some(label) = code_label(category, &normalized.code, language) {
            return label.to_string();
        }
    }
    clean_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_arabic_answers_share_codes() {
        assert_eq!(normalize(Category::WaterSufficiency, "Sufficient"), "sufficient");
        assert_eq!(normalize(Category::WaterSufficiency, "كافي"), "sufficient");
        assert_eq!(normalize(Category::Village, "الباروك"), "barouk");
        assert_eq!(normalize(Category::Village, "Baroque"), "barouk");
        assert_eq!(normalize(Category::EnergySource, "طاقة شمسية"), "solar");
        assert_eq!(normalize(Category::EnergySource, "Solar power"), "solar");
    }

    #[test]
    fn insufficient_never_collapses_into_sufficient() {
        assert_eq!(
            normalize(Category::WaterSufficiency, "Insufficient"),
            "insufficient"
        );
        assert_eq!(
            normalize(Category::WaterSufficiency, "غير كافي"),
            "insufficient"
        );
        assert_eq!(
            normalize(Category::WaterSufficiency, "Water is not sufficient"),
            "insufficient"
        );
    }

    #[test]
    fn reports_match_kind() {
        assert_eq!(
            classify(Category::CropType, "Olive").kind,
            MatchKind::Exact
        );
        assert_eq!(
            classify(Category::CropType, "OLIVE").kind,
            MatchKind::CaseInsensitive
        );
        assert_eq!(
            classify(Category::CropType, "olive trees").kind,
            MatchKind::Contains
        );
        assert_eq!(
            classify(Category::Village, "Mokht").kind,
            MatchKind::ContainedIn
        );
    }

    #[test]
    fn strips_question_prefix_before_matching() {
        assert_eq!(normalize(Category::Village, "4.القرية: الباروك"), "barouk");
        assert_eq!(normalize(Category::Village, "القرية: عين وزين"), "ain_wazin");
    }

    #[test]
    fn longest_alias_wins() {
        assert_eq!(
            normalize(Category::Village, "شواليق دير القمر"),
            "chawalik_deir_el_qamar"
        );
        assert_eq!(normalize(Category::Village, "دير القمر"), "deir_el_qamar");
    }

    #[test]
    fn unknown_values_fall_back_to_sanitized_text() {
        let normalized = classify(Category::SoilType, "Volcanic ash!");
        assert_eq!(normalized.code, "volcanic_ash");
        assert!(!normalized.is_known());
    }

    #[test]
    fn unknown_category_uses_fallback_only() {
        let category = parse_category("weather");
        assert_eq!(category, Category::Generic);
        assert_eq!(normalize(category, "Sunny Days"), "sunny_days");
        assert_eq!(parse_category("soilType"), Category::SoilType);
    }

    #[test]
    fn composite_values_match_any_item() {
        let codes = value_codes(Category::CropType, "Apple, Tomato");
        assert!(codes.contains("apple"));
        assert!(codes.contains("tomato"));
        assert!(!codes.contains("olive"));

        assert!(matches_code(Category::CropType, "تفاح، بندورة", "tomato"));
        assert!(!matches_code(Category::CropType, "تفاح، بندورة", "olive"));
    }

    #[test]
    fn short_aliases_need_whole_tokens() {
        assert_eq!(normalize(Category::FertilizerReliance, "لا"), "no_dependency");
        assert_eq!(normalize(Category::DayNight, "D"), "day");
        assert_eq!(normalize(Category::DayNight, "N"), "night");
    }

    #[test]
    fn display_labels_follow_language() {
        assert_eq!(
            display_label(Category::WaterSufficiency, "كافي", Language::En),
            "Sufficient"
        );
        assert_eq!(
            display_label(Category::WaterSufficiency, "Sufficient", Language::Ar),
            "كافي"
        );
        assert_eq!(
            display_label(Category::SoilType, "القرية: Volcanic", Language::En),
            "Volcanic"
        );
        assert_eq!(code_label(Category::DayNight, "night", Language::Ar), Some("ليل"));
    }

    #[test]
    fn empty_values_have_no_codes() {
        assert!(value_codes(Category::CropType, "  ").is_empty());
        assert!(value_codes(Category::CropType, ",").is_empty());
    }

    #[test]
    fn conjunction_joined_crops_keep_every_item() {
        let set = |codes: &[&str]| codes.iter().map(ToString::to_string).collect::<BTreeSet<_>>();

        assert_eq!(value_codes(Category::CropType, "Apples and tomatoes"), set(&["apple", "tomato"]));
        assert_eq!(value_codes(Category::CropType, "تفاح وبندورة"), set(&["apple", "tomato"]));
        assert_eq!(value_codes(Category::CropType, "زيتون و عنب"), set(&["grape", "olive"]));
        assert_eq!(value_codes(Category::CropType, "Olives / grapes"), set(&["grape", "olive"]));
    }

    #[test]
    fn conjunction_joined_energy_sources_keep_every_item() {
        let en = value_codes(Category::EnergySource, "Solar panels and diesel generator");
        let ar = value_codes(Category::EnergySource, "طاقة شمسية ومولد");
        assert!(en.contains("solar") && en.contains("generator"), "{en:?}");
        assert_eq!(en, ar);
    }

    #[test]
    fn aliases_inside_longer_matches_do_not_count() {
        let codes = value_codes(Category::WaterSufficiency, "Insufficient");
        assert_eq!(codes, BTreeSet::from(["insufficient".to_string()]));

        let codes = value_codes(Category::WaterSufficiency, "غير كافي");
        assert_eq!(codes, BTreeSet::from(["insufficient".to_string()]));

        let codes = value_codes(Category::Village, "شواليق دير القمر");
        assert_eq!(codes, BTreeSet::from(["chawalik_deir_el_qamar".to_string()]));

        let codes = value_codes(Category::EnergySource, "Diesel/Generator");
        assert_eq!(codes, BTreeSet::from(["generator".to_string()]));
    }

    #[test]
    fn items_without_aliases_fall_back_to_classify() {
        assert_eq!(
            segment_codes(Category::SoilType, "Volcanic ash!"),
            BTreeSet::from(["volcanic_ash".to_string()])
        );
    }
}
