//! Filter predicate engine.
//!
//! A feature passes when it satisfies every active criterion of its layer.
//! Multi-select and text criteria must match. Range, flag and yes/no
//! criteria let a feature through when its value is missing or unreadable.

use std::sync::LazyLock;

use regex::Regex;
use resolve_map_filter_models::{ActiveFilters, FilterCriterion, FilterField};
use resolve_map_normalize::{Category, clean_text, text, value_codes};
use resolve_map_survey_models::{Language, LayerId, SurveyFeature, value_as_text};
use serde_json::Value;

use crate::FilterError;
use crate::parsing::{extract_months, parse_date, parse_time, value_number};
use crate::rules::{Axis, FieldRule, Matcher, Presence, ValueSource, rule_for};

static SOLAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)شمس|solar").expect("valid regex"));

static DIESEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ديزل|مولد|مازوت|generator|diesel").expect("valid regex"));

/// Answers that mean "nothing" for presence fields.
static NONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(لا|لا يوجد|no|none|-)\s*$").expect("valid regex")
});

static YES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)نعم|\byes\b").expect("valid regex"));

static NO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(لا|no)\b").expect("valid regex"));

/// Raw, non-null values a rule reads from `feature`, current language first.
fn read_values<'a>(
    feature: &'a SurveyFeature,
    source: ValueSource,
    language: Language,
) -> Vec<&'a Value> {
    let properties = &feature.properties;
    let mut values = Vec::new();

    for lang in properties.match_languages(language) {
        let dict = properties.dictionary(lang);
        match source {
            ValueSource::FirstOf(keys) | ValueSource::Coordinate { keys, .. } => {
                if let Some(key) = properties.find_first_key(keys, lang) {
                    values.extend(dict.get(key));
                }
            }
            ValueSource::AnyOf(keys) => {
                values.extend(keys.iter().filter_map(|key| dict.get(*key)));
            }
            ValueSource::FirstNumeric(keys) => {
                values.extend(
                    keys.iter()
                        .filter_map(|key| dict.get(*key))
                        .find(|value| value_number(value).is_some()),
                );
            }
            ValueSource::AllValues => values.extend(dict.values()),
        }
    }

    values.retain(|value| !value.is_null());
    values
}

fn read_texts(feature: &SurveyFeature, source: ValueSource, language: Language) -> Vec<String> {
    read_values(feature, source, language)
        .into_iter()
        .filter_map(value_as_text)
        .map(|raw| clean_text(&raw))
        .filter(|text| !text.is_empty())
        .collect()
}

/// Whether one raw answer matches one selected label or code.
///
/// Selections that resolve to a known group compare by code, so either
/// language's label (or the code itself) selects the same answers. Other
/// selections match by case-insensitive substring or by fallback code.
fn matches_selection(category: Category, text: &str, selection: &str) -> bool {
    let codes = value_codes(category, text);

    if category.group(selection).is_some() {
        return codes.contains(selection);
    }

    let normalized = resolve_map_normalize::classify(category, selection);
    if normalized.is_known() {
        return codes.contains(&normalized.code);
    }

    let needle = text::fold(&clean_text(selection));
    if !needle.is_empty() && text::fold(text).contains(&needle) {
        return true;
    }
    codes.contains(&normalized.code)
}

fn in_range(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|min| value >= min) && max.is_none_or(|max| value <= max)
}

/// Month range check; `start > end` wraps around the year end.
fn month_in_range(month: u8, start: Option<u8>, end: Option<u8>) -> bool {
    let start = start.unwrap_or(1);
    let end = end.unwrap_or(12);
    if start <= end {
        (start..=end).contains(&month)
    } else {
        month >= start || month <= end
    }
}

fn coordinate(feature: &SurveyFeature, values: &[&Value], axis: Axis) -> Option<f64> {
    values
        .iter()
        .find_map(|value| value_number(value))
        .or_else(|| {
            feature.point().map(|(lng, lat)| match axis {
                Axis::Lat => lat,
                Axis::Lon => lng,
            })
        })
}

fn presence(kind: Presence, text: &str) -> bool {
    match kind {
        Presence::Solar => SOLAR_RE.is_match(text),
        Presence::Diesel => DIESEL_RE.is_match(text),
        Presence::Answered => !NONE_RE.is_match(text),
    }
}

fn yes_no(text: &str) -> Option<bool> {
    if YES_RE.is_match(text) {
        Some(true)
    } else if NO_RE.is_match(text) {
        Some(false)
    } else {
        None
    }
}

fn check(
    feature: &SurveyFeature,
    rule: &FieldRule,
    criterion: &FilterCriterion,
    language: Language,
) -> bool {
    match (criterion, rule.matcher) {
        (FilterCriterion::MultiSelect { values }, Matcher::Category(category)) => {
            let texts = read_texts(feature, rule.source, language);
            texts.iter().any(|text| {
                values
                    .iter()
                    .any(|selection| matches_selection(category, text, selection))
            })
        }
        (FilterCriterion::NumberRange { min, max }, _) => {
            let values = read_values(feature, rule.source, language);
            let number = match rule.source {
                ValueSource::Coordinate { axis, .. } => coordinate(feature, &values, axis),
                _ => values.iter().find_map(|value| value_number(value)),
            };
            number.is_none_or(|n| in_range(n, *min, *max))
        }
        (FilterCriterion::MonthRange { start, end }, _) => {
            let Some(months) = read_texts(feature, rule.source, language)
                .iter()
                .map(|text| extract_months(text))
                .find(|months| !months.is_empty())
            else {
                return true;
            };
            months
                .into_iter()
                .any(|month| month_in_range(month, *start, *end))
        }
        (FilterCriterion::DateRange { start, end }, _) => read_values(feature, rule.source, language)
            .into_iter()
            .find_map(parse_date)
            .is_none_or(|date| {
                start.is_none_or(|start| date >= start) && end.is_none_or(|end| date <= end)
            }),
        (FilterCriterion::TimeRange { start, end }, _) => read_values(feature, rule.source, language)
            .into_iter()
            .find_map(parse_time)
            .is_none_or(|minutes| {
                start.is_none_or(|start| minutes >= start) && end.is_none_or(|end| minutes <= end)
            }),
        (FilterCriterion::Flag { value }, Matcher::Presence(kind)) => {
            let texts = read_texts(feature, rule.source, language);
            if texts.is_empty() {
                return true;
            }
            texts.iter().any(|text| presence(kind, text)) == *value
        }
        (FilterCriterion::YesNo { value }, _) => read_texts(feature, rule.source, language)
            .iter()
            .find_map(|text| yes_no(text))
            .is_none_or(|answer| answer == *value),
        (FilterCriterion::TextContains { text: needle }, _) => {
            let needle = text::fold(needle);
            read_texts(feature, rule.source, language)
                .iter()
                .any(|text| text::fold(text).contains(&needle))
        }
        (FilterCriterion::MultiSelect { .. } | FilterCriterion::Flag { .. }, _) => {
            log::warn!("Rule for {} cannot evaluate {criterion:?}", rule.field);
            false
        }
    }
}

/// Evaluates `feature` against every active criterion of `layer`.
///
/// # Errors
///
/// * If a criterion is set on a field the layer does not have
/// * If a criterion's kind does not fit its field
pub fn evaluate(
    feature: &SurveyFeature,
    layer: LayerId,
    filters: &ActiveFilters,
    language: Language,
) -> Result<bool, FilterError> {
    for (field, criterion) in filters.iter() {
        if !criterion.is_active() {
            continue;
        }
        let rule = rule_for(layer, field)?;
        ensure_kind(field, criterion)?;
        if !check(feature, rule, criterion, language) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Checks that `criterion` fits `field`.
///
/// # Errors
///
/// * If the criterion's kind differs from the field's kind
pub fn ensure_kind(field: FilterField, criterion: &FilterCriterion) -> Result<(), FilterError> {
    if criterion.kind() == field.kind() {
        Ok(())
    } else {
        Err(FilterError::KindMismatch {
            field,
            expected: field.kind(),
            found: criterion.kind(),
        })
    }
}

/// Whether `feature` passes every active criterion.
///
/// Evaluation errors exclude the feature and are logged; they never abort
/// filtering of the remaining features.
#[must_use]
pub fn matches(
    feature: &SurveyFeature,
    layer: LayerId,
    filters: &ActiveFilters,
    language: Language,
) -> bool {
    match evaluate(feature, layer, filters, language) {
        Ok(passes) => passes,
        Err(e) => {
            log::warn!(
                "Excluding feature {:?} on {layer}: {e}",
                feature.stable_id()
            );
            false
        }
    }
}

/// Features of `features` passing every active criterion, in input order.
#[must_use]
pub fn filter_features(
    features: &[SurveyFeature],
    layer: LayerId,
    filters: &ActiveFilters,
    language: Language,
) -> Vec<SurveyFeature> {
    features
        .iter()
        .filter(|feature| matches(feature, layer, filters, language))
        .cloned()
        .collect()
}
