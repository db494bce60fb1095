//! Text normalization for platform labels, noisy numbers, and dates.
//!
//! Everything here is pure and total: malformed input yields `None` (or, for
//! platform labels, the input itself) rather than an error, because every
//! caller already has a fallback for a missing value.

use chrono::{DateTime, NaiveDate};

/// Ordered platform alias rules: `(aliases, canonical id)`.
///
/// Matching is a case-insensitive substring test against the label with `-`
/// and `_` folded to spaces, and the first matching rule wins. More specific
/// aliases therefore MUST precede catch-alls (`"playstation 5"` before
/// `"playstation"`, `"3ds"` before `"ds"`, `"wii u"` before `"wii"`).
/// Each canonical id also matches its own rule, which keeps normalization
/// idempotent.
const PLATFORM_RULES: &[(&[&str], &str)] = &[
    (&["playstation 5", "ps5"], "playstation-5"),
    (&["playstation 4", "ps4"], "playstation-4"),
    (&["playstation 3", "ps3"], "playstation-3"),
    (&["playstation 2", "ps2"], "playstation-2"),
    (&["playstation vita", "ps vita", "psvita"], "playstation-vita"),
    (&["playstation portable", "psp"], "psp"),
    (&["playstation", "ps1", "psx"], "playstation"),
    (&["xbox series", "xsx"], "xbox-series-x"),
    (&["xbox one", "xone"], "xbox-one"),
    (&["xbox 360", "x360"], "xbox-360"),
    (&["xbox"], "xbox"),
    (&["switch 2"], "nintendo-switch-2"),
    (&["switch"], "nintendo-switch"),
    (&["wii u", "wiiu"], "wii-u"),
    (&["wii"], "wii"),
    (&["3ds"], "3ds"),
    (&["nintendo 64", "n64"], "nintendo-64"),
    (&["gamecube", "game cube"], "gamecube"),
    (&["game boy advance", "gba"], "game-boy-advance"),
    (&["nintendo ds", "ds"], "ds"),
    (&["pc", "windows"], "pc"),
    (&["macintosh", "macos", "mac os", "mac"], "mac"),
    (&["ios", "iphone", "ipad"], "ios"),
    (&["android"], "android"),
    (&["stadia"], "stadia"),
    (&["dreamcast"], "dreamcast"),
    (&["meta quest", "oculus quest"], "meta-quest"),
];

/// `true` when `token` is one of the canonical platform ids, as used in
/// `/game/<platform>/<slug>/` paths.
#[must_use]
pub fn is_platform_token(token: &str) -> bool {
    PLATFORM_RULES
        .iter()
        .any(|(_, canonical)| *canonical == token)
}

/// Maps a free-text platform label to a canonical platform id.
///
/// Unknown labels are kept so the data is not lost. They are returned with
/// surrounding whitespace trimmed (page labels arrive padded with layout
/// whitespace) but with case and inner text untouched. Absent or blank input
/// yields `None`.
#[must_use]
pub fn normalize_platform(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }

    let folded = fold_label(trimmed);
    let canonical = PLATFORM_RULES.iter().find_map(|(aliases, canonical)| {
        aliases
            .iter()
            .any(|alias| folded.contains(alias))
            .then_some(*canonical)
    });

    Some(canonical.map_or_else(|| trimmed.to_owned(), str::to_owned))
}

fn fold_label(label: &str) -> String {
    label
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a number out of noisy text by discarding every character that is
/// not an ASCII digit or `.`.
///
/// `"78 Metascore"` gives `78`, `"Based on 1,204 Ratings"` gives `1204`,
/// `"N/A"` and `""` give `None`.
#[must_use]
pub fn parse_numeric_text(text: Option<&str>) -> Option<f64> {
    let digits: String = text?
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A critic-scale score: a whole number in `0..=100`.
#[must_use]
pub fn parse_critic_score(text: Option<&str>) -> Option<u8> {
    critic_score(parse_numeric_text(text)?)
}

/// Accepts `value` as a critic-scale score only if it is a whole number in `0..=100`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn critic_score(value: f64) -> Option<u8> {
    if value.fract() != 0.0 || !(0.0..=100.0).contains(&value) {
        return None;
    }
    Some(value as u8)
}

/// A user-scale score: a decimal in `0..=10`.
#[must_use]
pub fn parse_user_score(text: Option<&str>) -> Option<f64> {
    parse_numeric_text(text).filter(|v| (0.0..=10.0).contains(v))
}

/// A non-negative whole count such as `"Based on 1,204 Ratings"`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_count(text: Option<&str>) -> Option<u64> {
    let value = parse_numeric_text(text)?;
    if value.fract() != 0.0 || !(0.0..=9.0e15).contains(&value) {
        return None;
    }
    Some(value as u64)
}

const DATE_FORMATS: &[&str] = &["%b %d, %Y", "%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y", "%d %B %Y"];

/// Returns the date as `YYYY-MM-DD` when it matches a known format, the
/// trimmed raw text otherwise, and `None` for blank input.
#[must_use]
pub fn normalize_date(text: Option<&str>) -> Option<String> {
    let cleaned = clean_text(text?)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(&cleaned) {
        return Some(dt.date_naive().format("%Y-%m-%d").to_string());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&cleaned, fmt).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .or(Some(cleaned))
}

/// Collapses runs of whitespace and trims. Blank input yields `None`.
#[must_use]
pub fn clean_text(text: &str) -> Option<String> {
    let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
