//! Parsing numbers, months, dates and times out of free-text answers.
//!
//! Every parser returns `None` (or nothing) for text it cannot read; the
//! predicate engine treats that the same as a missing value.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde_json::Value;

/// First signed decimal number, with `.` or `,` as decimal separator.
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]+(?:[.,][0-9]+)?").expect("valid regex"));

/// One- or two-digit month numbers.
static MONTH_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}").expect("valid regex"));

/// `HH:MM` at the start of the text.
static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})").expect("valid regex"));

/// Letter or digit runs for month-name lookup.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+|[0-9]+").expect("valid regex"));

/// Alef variants folded to a bare alef.
static ALEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[أإآ]").expect("valid regex"));

/// Two-word Levantine month names, matched before single words.
const COMPOUND_MONTHS: &[(&str, u8)] = &[
    ("كانون الثاني", 1),
    ("تشرين الاول", 10),
    ("تشرين الثاني", 11),
    ("كانون الاول", 12),
];

/// Single-word month names (English, Levantine and Egyptian Arabic).
const MONTH_NAMES: &[(&str, u8)] = &[
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
    ("شباط", 2),
    ("اذار", 3),
    ("نيسان", 4),
    ("ايار", 5),
    ("حزيران", 6),
    ("تموز", 7),
    ("اب", 8),
    ("ايلول", 9),
    ("يناير", 1),
    ("فبراير", 2),
    ("مارس", 3),
    ("ابريل", 4),
    ("مايو", 5),
    ("يونيو", 6),
    ("يونيه", 6),
    ("يوليو", 7),
    ("يوليه", 7),
    ("اغسطس", 8),
    ("سبتمبر", 9),
    ("اكتوبر", 10),
    ("نوفمبر", 11),
    ("ديسمبر", 12),
];

/// Month names that are also everyday words ("may", Arabic "أب").
///
/// These only count when capitalised, when they are the whole answer, or
/// when a number or another month name sits next to them.
const AMBIGUOUS_MONTH_NAMES: &[&str] = &["may", "اب"];

/// Words skipped when looking for a neighbouring month.
const CONNECTORS: &[&str] = &[
    "and", "or", "to", "till", "until", "through", "و", "او", "الى", "حتى",
];

/// Date layouts tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

/// First number in `text`.
///
/// A comma decimal separator is accepted (`"3,5"` → `3.5`).
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let m = NUMBER_RE.find(text)?;
    m.as_str().replace(',', ".").parse().ok()
}

/// Numeric reading of a raw property value.
#[must_use]
pub fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn fold_arabic(text: &str) -> String {
    ALEF_RE.replace_all(&text.to_lowercase(), "ا").into_owned()
}

/// Month named by a folded word, allowing a leading `و`.
fn month_name(word: &str) -> Option<(&'static str, u8)> {
    let bare = word.strip_prefix('و').unwrap_or(word);
    [word, bare].into_iter().find_map(|candidate| {
        MONTH_NAMES
            .iter()
            .find(|(name, _)| *name == candidate)
            .copied()
    })
}

/// Whether a folded token is a number or an unambiguous month name.
fn is_month_context(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit())
        || month_name(word).is_some_and(|(name, _)| !AMBIGUOUS_MONTH_NAMES.contains(&name))
}

/// Whether the nearest non-connector token on either side of `at` is a
/// number or a month name.
fn has_month_neighbour(tokens: &[(&str, String)], at: usize) -> bool {
    let is_connector = |word: &&str| CONNECTORS.contains(word);
    let before = tokens[..at]
        .iter()
        .rev()
        .map(|(_, word)| word.as_str())
        .find(|word| !is_connector(word));
    let after = tokens[at + 1..]
        .iter()
        .map(|(_, word)| word.as_str())
        .find(|word| !is_connector(word));

    before.is_some_and(is_month_context) || after.is_some_and(is_month_context)
}

/// Every month (1-12) mentioned in `text`, by number or by name.
///
/// Names that double as ordinary words ("may") need month context: a
/// capital letter, a neighbouring number or month, or nothing else in the
/// answer.
#[must_use]
pub fn extract_months(text: &str) -> BTreeSet<u8> {
    let mut months: BTreeSet<u8> = MONTH_NUMBER_RE
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<u8>().ok())
        .filter(|n| (1..=12).contains(n))
        .collect();

    let folded = fold_arabic(text);
    for (name, month) in COMPOUND_MONTHS {
        if folded.contains(name) {
            months.insert(*month);
        }
    }

    let tokens: Vec<(&str, String)> = TOKEN_RE
        .find_iter(text)
        .map(|m| (m.as_str(), fold_arabic(m.as_str())))
        .collect();

    for (at, (raw, word)) in tokens.iter().enumerate() {
        let Some((name, month)) = month_name(word) else {
            continue;
        };
        let in_context = !AMBIGUOUS_MONTH_NAMES.contains(&name)
            || tokens.len() == 1
            || raw.chars().next().is_some_and(char::is_uppercase)
            || has_month_neighbour(&tokens, at);
        if in_context {
            months.insert(month);
        }
    }

    months
}

/// Calendar date of a raw property value.
///
/// Accepts ISO dates (optionally followed by a time), common slash layouts,
/// and epoch milliseconds.
#[must_use]
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        Value::String(s) => parse_date_text(s),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let date_part = text
        .split(|c: char| c == 'T' || c.is_whitespace())
        .next()
        .unwrap_or(text);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        .or_else(|| {
            text.parse::<i64>()
                .ok()
                .and_then(DateTime::from_timestamp_millis)
                .map(|dt| dt.date_naive())
        })
}

/// Time of day of a raw property value, in minutes since midnight.
///
/// Reads `HH:MM` text, or the compact `HHMM` form satellite detections use
/// (`830` → 08:30).
#[must_use]
pub fn parse_time(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(compact_time),
        Value::String(s) => parse_time_text(s),
        _ => None,
    }
}

fn parse_time_text(text: &str) -> Option<u16> {
    let text = text.trim();

    if let Some(caps) = CLOCK_RE.captures(text) {
        let hours: u16 = caps[1].parse().ok()?;
        let minutes: u16 = caps[2].parse().ok()?;
        return clock_minutes(hours, minutes);
    }

    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok().and_then(compact_time);
    }

    None
}

fn compact_time(hhmm: u64) -> Option<u16> {
    let hours = u16::try_from(hhmm / 100).ok()?;
    let minutes = u16::try_from(hhmm % 100).ok()?;
    clock_minutes(hours, minutes)
}

const fn clock_minutes(hours: u16, minutes: u16) -> Option<u16> {
    if hours < 24 && minutes < 60 {
        Some(hours * 60 + minutes)
    } else {
        None
    }
}

/// Parses a user-supplied `HH:MM` bound into minutes since midnight.
#[must_use]
pub fn parse_clock(text: &str) -> Option<u16> {
    let caps = CLOCK_RE.captures(text.trim())?;
    clock_minutes(caps[1].parse().ok()?, caps[2].parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_take_first_token() {
        assert_eq!(parse_number("حوالي 120 طير"), Some(120.0));
        assert_eq!(parse_number("3,5 kWh"), Some(3.5));
        assert_eq!(parse_number("-12.25"), Some(-12.25));
        assert_eq!(parse_number("لا يوجد"), None);
        assert_eq!(value_number(&json!(42)), Some(42.0));
        assert_eq!(value_number(&json!(null)), None);
    }

    #[test]
    fn months_from_numbers() {
        let months = extract_months("6-9, 13, 0");
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![6, 9]);
    }

    #[test]
    fn months_from_names() {
        let months = extract_months("تموز وآب");
        assert!(months.contains(&7));
        assert!(months.contains(&8));

        let months = extract_months("June, July and August");
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![6, 7, 8]);

        let months = extract_months("يوليو - أغسطس");
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![7, 8]);
    }

    #[test]
    fn compound_month_names_do_not_leak_single_words() {
        let months = extract_months("كانون الثاني");
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![1]);

        let months = extract_months("تشرين الأول");
        assert_eq!(months.into_iter().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn unrelated_words_are_not_months() {
        assert!(extract_months("Mayor of the village").is_empty());
        assert!(extract_months("لا يوجد").is_empty());
    }

    #[test]
    fn may_as_a_verb_is_not_a_month() {
        assert!(extract_months("It depends, may vary").is_empty());
        assert!(extract_months("Water may run short in summer").is_empty());
        assert!(extract_months("أب وأم في الحقل").is_empty());
    }

    #[test]
    fn may_in_month_context_is_a_month() {
        let may = vec![5];
        assert_eq!(extract_months("May").into_iter().collect::<Vec<_>>(), may);
        assert_eq!(extract_months("may").into_iter().collect::<Vec<_>>(), may);
        assert_eq!(extract_months("Dry in May").into_iter().collect::<Vec<_>>(), may);
        assert_eq!(extract_months("may 2023").into_iter().collect::<Vec<_>>(), may);
        assert_eq!(
            extract_months("April, may").into_iter().collect::<Vec<_>>(),
            vec![4, 5]
        );
        assert_eq!(
            extract_months("april to may").into_iter().collect::<Vec<_>>(),
            vec![4, 5]
        );
        assert_eq!(extract_months("آب").into_iter().collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn dates_in_several_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 7, 15);
        assert_eq!(parse_date(&json!("2024-07-15")), expected);
        assert_eq!(parse_date(&json!("2024-07-15T10:30:00Z")), expected);
        assert_eq!(parse_date(&json!("07/15/2024")), expected);
        assert_eq!(parse_date(&json!(1_721_001_600_000_i64)), expected);
        assert_eq!(parse_date(&json!("not a date")), None);
    }

    #[test]
    fn times_in_clock_and_compact_form() {
        assert_eq!(parse_time(&json!("08:30")), Some(510));
        assert_eq!(parse_time(&json!("830")), Some(510));
        assert_eq!(parse_time(&json!(1745)), Some(1065));
        assert_eq!(parse_time(&json!("25:00")), None);
        assert_eq!(parse_time(&json!("")), None);
        assert_eq!(parse_clock("18:00"), Some(1080));
    }
}
