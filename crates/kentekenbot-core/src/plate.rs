//! License plate detection in free text.
//!
//! A best-effort heuristic, not a validator: the first plate-shaped token in
//! the text wins, and false positives (e.g. `mp3`) are accepted because an
//! unknown plate simply yields a "no data" lookup downstream.

use std::sync::LazyLock;

use regex::Regex;

/// Dutch side-code layouts, matched after hyphens have been stripped.
///
/// Alternatives are tried leftmost-first:
/// 1. optional digit, 1-3 letters, 1-3 digits, 0-2 letters (`A123BC`, `8XBR35`)
/// 2. two letters, two digits, two letters (`AB12CD`)
/// 3. 1-2 digits, 1-3 letters, 1-2 digits (`12ABC3`, `99XX99`)
///
/// Word boundaries are ASCII-only, so an accented letter such as `é` does not
/// glue onto an adjacent plate.
static PLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?-u:\b)[0-9]?[A-Za-z]{1,3}-?[0-9]{1,3}-?[A-Za-z]{0,2}(?-u:\b)",
        r"|(?-u:\b)[A-Za-z]{2}[0-9]{2}[A-Za-z]{2}(?-u:\b)",
        r"|(?-u:\b)[0-9]{1,2}-?[A-Za-z]{1,3}-?[0-9]{1,2}(?-u:\b)",
    ))
    .expect("plate pattern is a valid regex")
});

/// Return the first plate-like token in `text`, uppercased and without hyphens.
pub fn extract_plate(text: &str) -> Option<String> {
    let cleaned = text.replace('-', "");
    PLATE_PATTERN
        .find(&cleaned)
        .map(|m| m.as_str().to_uppercase())
}
