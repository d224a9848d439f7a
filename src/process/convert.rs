// src/process/convert.rs

/// Marker the source writes in place of stats for inactive players.
pub const DID_NOT_PLAY: &str = "Did Not Play";
/// Stored minutes value for inactive players.
pub const DNP: &str = "DNP";

const MAX_MINUTES_LEN: usize = 10;

/// Cell texts that mean "no value" in the scraped CSVs.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing_token(s: &str) -> bool {
    MISSING_TOKENS.contains(&s)
}

/// Scalar types a stat cell can be coerced into.
pub trait Coerce: Sized + Copy {
    fn coerce(s: &str) -> Option<Self>;
}

impl Coerce for i64 {
    /// `"12"` and `"12.0"` both give 12; fractional text is truncated.
    fn coerce(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.contains('.') {
            let f: f64 = s.parse().ok()?;
            if !f.is_finite() {
                return None;
            }
            return Some(f.trunc() as i64);
        }
        s.parse().ok()
    }
}

impl Coerce for f64 {
    fn coerce(s: &str) -> Option<Self> {
        s.trim().parse().ok()
    }
}

/// Convert a cell, falling back to `default` for missing, sentinel or
/// unparsable values. Never fails.
pub fn safe_convert<T: Coerce>(value: Option<&str>, default: T) -> T {
    match value {
        Some(v) if !is_sentinel(v) => T::coerce(v).unwrap_or(default),
        _ => default,
    }
}

/// A bare comma shows up in empty percentage cells.
fn is_sentinel(v: &str) -> bool {
    is_missing_token(v) || v == "," || v.contains(DID_NOT_PLAY)
}

/// Normalise a minutes-played cell.
///
/// - missing → `None`
/// - anything containing "Did Not Play" → `"DNP"`
/// - `"m:ss"` → zero-padded `"MM:SS"`
/// - anything else (including clock text that does not split into two
///   integers) → first 10 characters
pub fn safe_convert_minutes(value: Option<&str>) -> Option<String> {
    let v = value.filter(|v| !is_missing_token(v))?;

    if v.contains(DID_NOT_PLAY) {
        return Some(DNP.to_string());
    }
    if v.contains(':') {
        if let Some(clock) = format_clock(v) {
            return Some(clock);
        }
    }
    Some(truncate_chars(v, MAX_MINUTES_LEN))
}

fn format_clock(v: &str) -> Option<String> {
    let parts: Vec<&str> = v.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let minutes: i64 = parts[0].trim().parse().ok()?;
    let seconds: i64 = parts[1].trim().parse().ok()?;
    Some(format!("{:02}:{:02}", minutes, seconds))
}

fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
