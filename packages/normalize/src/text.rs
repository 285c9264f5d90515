//! Text cleaning applied to survey answers before classification.
//!
//! Raw answers often carry the question they answer (`"4.القرية: الباروك"`),
//! stray trailing colons, Arabic diacritics, or inconsistent spacing. Every
//! function here is deterministic and applied symmetrically to aliases and
//! values, so a match never depends on which side carried the noise.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Leading question numbering such as `"13. "` or `"4."`.
static NUMBERING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\s*[.\-)]\s*").expect("valid regex"));

/// Arabic harakat and tatweel.
static DIACRITICS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{064B}-\u{0652}\u{0640}]").expect("valid regex"));

/// Separators folded into plain spaces.
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_]+").expect("valid regex"));

/// Runs of anything that is not a letter or digit.
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid regex"));

/// Separators between items of a composite answer.
static LIST_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,،;؛]").expect("valid regex"));

/// Aliases this short only match whole tokens.
const SHORT_ALIAS_CHARS: usize = 3;

/// Strips a leading `label:` prefix, a trailing colon and leading question
/// numbering from a raw answer.
///
/// The prefix is only removed when something follows the colon, so
/// `"القرية:"` stays a (colon-less) label rather than becoming empty.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let trimmed = raw.trim();

    let after_prefix = match trimmed.split_once(':') {
        Some((label, rest))
            if !rest.trim().is_empty() && label.chars().any(char::is_alphabetic) =>
        {
            rest.trim()
        }
        _ => trimmed,
    };

    let without_colon = after_prefix.trim_end_matches(':').trim_end();

    strip_numbering(without_colon).to_string()
}

/// Drops leading question numbering when text (not another digit) follows.
fn strip_numbering(text: &str) -> &str {
    match NUMBERING_RE.find(text) {
        Some(m) => {
            let rest = &text[m.end()..];
            match rest.chars().next() {
                Some(c) if !c.is_ascii_digit() => rest.trim(),
                _ => text,
            }
        }
        None => text,
    }
}

/// Folds text for comparison: lowercase, no diacritics, `-`/`_` treated as
/// spaces, whitespace collapsed.
#[must_use]
pub fn fold(text: &str) -> String {
    let lower = text.to_lowercase();
    let bare = DIACRITICS_RE.replace_all(&lower, "");
    SEPARATOR_RE.replace_all(&bare, " ").trim().to_string()
}

/// Fallback code for a value with no table entry.
///
/// Lowercases the value and collapses every non-alphanumeric run into a
/// single `_`, trimming underscores from both ends.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let lower = text.trim().to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "_")
        .trim_matches('_')
        .to_string()
}

/// Splits a composite answer (`"Apple, Tomato"`, `"تفاح، بندورة"`) into its
/// non-empty trimmed items.
///
/// A value without separators yields itself.
#[must_use]
pub fn split_composite(text: &str) -> Vec<&str> {
    LIST_SEPARATOR_RE
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Whether `text` contains a list separator.
#[must_use]
pub fn is_composite(text: &str) -> bool {
    LIST_SEPARATOR_RE.is_match(text)
}

/// Byte spans of every occurrence of folded `needle` in folded `haystack`.
///
/// Very short needles (`"no"`, `"لا"`, `"d"`) only match a whole token,
/// optionally behind the Arabic conjunction prefix `و`, so they do not fire
/// inside unrelated words.
#[must_use]
pub fn find_folded(haystack: &str, needle: &str) -> Vec<Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    let whole_token = needle.chars().count() <= SHORT_ALIAS_CHARS;

    haystack
        .match_indices(needle)
        .map(|(start, found)| start..start + found.len())
        .filter(|span| {
            !whole_token
                || (token_starts_at(haystack, span.start)
                    && haystack[span.end..]
                        .chars()
                        .next()
                        .is_none_or(|c| !c.is_alphanumeric()))
        })
        .collect()
}

/// Whether a token starts at byte `at`, allowing a leading `و`.
fn token_starts_at(haystack: &str, at: usize) -> bool {
    let mut before = haystack[..at].chars().rev();
    match before.next() {
        None => true,
        Some('و') => before.next().is_none_or(|c| !c.is_alphanumeric()),
        Some(c) => !c.is_alphanumeric(),
    }
}

/// Whether folded `haystack` contains folded `needle`.
///
/// Short needles follow the whole-token rule of [`find_folded`].
#[must_use]
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    !find_folded(haystack, needle).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_label_prefix() {
        assert_eq!(clean_text("القرية: الباروك"), "الباروك");
        assert_eq!(clean_text("Village: Barouk"), "Barouk");
    }

    #[test]
    fn keeps_bare_label_without_trailing_colon() {
        assert_eq!(clean_text("القرية:"), "القرية");
        assert_eq!(clean_text("  Sufficient  "), "Sufficient");
    }

    #[test]
    fn strips_question_numbering() {
        assert_eq!(clean_text("4. Village"), "Village");
        assert_eq!(clean_text("13.مصدر المياه"), "مصدر المياه");
    }

    #[test]
    fn keeps_plain_numbers_and_times() {
        assert_eq!(clean_text("12"), "12");
        assert_eq!(clean_text("3."), "3.");
        assert_eq!(clean_text("3.5"), "3.5");
        assert_eq!(clean_text("08:30"), "08:30");
    }

    #[test]
    fn folds_case_diacritics_and_separators() {
        assert_eq!(fold("Bi-Weekly  Irrigation"), "bi weekly irrigation");
        assert_eq!(fold("ريّ"), "ري");
        assert_eq!(fold("Al_Barouk"), "al barouk");
    }

    #[test]
    fn sanitizes_to_snake_case() {
        assert_eq!(sanitize("Drip Irrigation!"), "drip_irrigation");
        assert_eq!(sanitize("  مياه  الآبار "), "مياه_الآبار");
        assert_eq!(sanitize("--"), "");
    }

    #[test]
    fn splits_latin_and_arabic_commas() {
        assert_eq!(split_composite("Apple, Tomato"), vec!["Apple", "Tomato"]);
        assert_eq!(split_composite("تفاح، بندورة،"), vec!["تفاح", "بندورة"]);
        assert_eq!(split_composite("Olive"), vec!["Olive"]);
        assert!(is_composite("a;b"));
        assert!(!is_composite("Diesel/Generator"));
    }

    #[test]
    fn short_needles_match_whole_tokens_only() {
        assert!(contains_folded("no", "no"));
        assert!(contains_folded("لا يوجد", "لا"));
        assert!(!contains_folded("none at all", "no"));
        assert!(!contains_folded("لبنان", "لبن"));
        assert!(contains_folded("insufficient water", "sufficient"));
        assert!(!contains_folded("anything", ""));
    }

    #[test]
    fn finds_every_occurrence_with_spans() {
        assert_eq!(find_folded("solar and solar panels", "solar"), vec![0..5, 10..15]);
        assert_eq!(find_folded("olives / grapes", "grape"), vec![9..14]);
        assert!(find_folded("grapes", "").is_empty());
    }

    #[test]
    fn short_needles_may_follow_the_arabic_conjunction() {
        assert!(contains_folded("زيتون وعنب", "عنب"));
        assert!(contains_folded("زيتون و عنب", "عنب"));
        assert!(!contains_folded("زيتون معنب", "عنب"));
    }
}
