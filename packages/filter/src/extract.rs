//! Unique-value extraction for filter controls.
//!
//! Options are rebuilt from the already-loaded features whenever the
//! display language changes; nothing is fetched again.

use std::collections::{BTreeMap, BTreeSet};

use resolve_map_filter_models::FilterField;
use resolve_map_normalize::{
    Category, classify, clean_text, code_label, display_label, segment_codes, text,
};
use resolve_map_survey_models::{FeatureStore, Language, LayerId, SurveyFeature, Theme, value_as_text};
use serde::{Deserialize, Serialize};

use crate::FilterError;
use crate::rules::{Matcher, ValueSource, category_for_candidates, rule_for};

/// Maximum number of distinct values offered per control.
pub const MAX_UNIQUE_VALUES: usize = 200;

/// One selectable option of a multi-select control.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FilterOption {
    /// Label in the current display language.
    pub label: String,
    /// Stable code the label stands for.
    pub code: String,
}

/// Raw answers of one feature: the first candidate key present, or every
/// present key when `any_key` is set.
fn feature_answers(
    feature: &SurveyFeature,
    keys: &[&str],
    any_key: bool,
    language: Language,
) -> Vec<String> {
    let dict = feature.properties.dictionary(language);

    let raw: Vec<_> = if any_key {
        keys.iter().filter_map(|key| dict.get(*key)).collect()
    } else {
        feature
            .properties
            .find_first_key(keys, language)
            .and_then(|key| dict.get(key))
            .into_iter()
            .collect()
    };

    raw.into_iter().filter_map(value_as_text).collect()
}

/// Cleaned, de-composited answer segments across `features`.
fn segments<'a>(
    features: &'a [SurveyFeature],
    keys: &'a [&'a str],
    any_key: bool,
    language: Language,
) -> impl Iterator<Item = String> + 'a {
    features.iter().flat_map(move |feature| {
        feature_answers(feature, keys, any_key, language)
            .into_iter()
            .flat_map(|answer| {
                let cleaned = clean_text(&answer);
                text::split_composite(&cleaned)
                    .into_iter()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
    })
}

/// Label and code of every item one segment names.
///
/// A segment naming several known items (`"Apples and tomatoes"`) yields
/// one pair per item; anything else yields its display label.
fn segment_options(category: Category, segment: &str, language: Language) -> Vec<(String, String)> {
    let labelled: Vec<(String, String)> = segment_codes(category, segment)
        .into_iter()
        .filter_map(|code| {
            code_label(category, &code, language).map(|label| (label.to_string(), code))
        })
        .collect();
    if labelled.len() > 1 {
        return labelled;
    }

    let label = display_label(category, segment, language);
    if label.is_empty() {
        Vec::new()
    } else {
        vec![(label, classify(category, segment).code)]
    }
}

/// Distinct display labels of a property across `features`.
///
/// Each feature contributes the value of the first candidate key it has;
/// values of later candidates are never merged in. Composite answers
/// contribute each item. Known values show their group label in
/// `language`, unknown values their cleaned text. At most
/// [`MAX_UNIQUE_VALUES`] labels are returned.
#[must_use]
pub fn unique_values(
    features: &[SurveyFeature],
    candidates: &[&str],
    category: Category,
    language: Language,
) -> BTreeSet<String> {
    let mut labels = BTreeSet::new();

    'segments: for segment in segments(features, candidates, false, language) {
        for (label, _) in segment_options(category, &segment, language) {
            labels.insert(label);
            if labels.len() >= MAX_UNIQUE_VALUES {
                log::debug!("Unique values capped at {MAX_UNIQUE_VALUES} for {candidates:?}");
                break 'segments;
            }
        }
    }

    labels
}

/// [`unique_values`] over the canonical features of `theme`.
///
/// The category is looked up from the theme's field rules; keys no
/// multi-select field reads fall back to cleaned raw values.
///
/// # Errors
///
/// * If the theme has not been loaded
pub fn unique_values_for_theme(
    store: &FeatureStore,
    theme: Theme,
    candidates: &[&str],
    language: Language,
) -> Result<BTreeSet<String>, FilterError> {
    let layer = theme.layer_id();
    let features = store.theme(theme).ok_or(FilterError::UnknownLayer(layer))?;
    let category = category_for_candidates(layer, candidates);
    Ok(unique_values(features, candidates, category, language))
}

/// Options of a multi-select `field` on `layer`, labelled in `language`
/// and paired with their codes, sorted by label.
///
/// Fields that are not multi-selects have no options.
///
/// # Errors
///
/// * If the field is not filterable on the layer
/// * If no data is loaded for the layer
pub fn filter_options(
    store: &FeatureStore,
    layer: LayerId,
    field: FilterField,
    language: Language,
) -> Result<Vec<FilterOption>, FilterError> {
    let rule = rule_for(layer, field)?;
    let Matcher::Category(category) = rule.matcher else {
        log::debug!("{field} on {layer} is not a multi-select; no options");
        return Ok(Vec::new());
    };
    let resolved = store.resolve(layer).ok_or(FilterError::UnknownLayer(layer))?;

    let any_key = matches!(rule.source, ValueSource::AnyOf(_));
    let mut options: BTreeMap<String, String> = BTreeMap::new();

    'segments: for segment in segments(resolved.features, rule.source.keys(), any_key, language) {
        for (label, code) in segment_options(category, &segment, language) {
            options.entry(label).or_insert(code);
            if options.len() >= MAX_UNIQUE_VALUES {
                break 'segments;
            }
        }
    }

    Ok(options
        .into_iter()
        .map(|(label, code)| FilterOption { label, code })
        .collect())
}
