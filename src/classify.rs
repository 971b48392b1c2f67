//! Substring heuristics that decide whether a number format denotes a date,
//! a time, both, or a plain number.
//!
//! Token matching is ASCII-lowercase `contains`, so `m` is ambiguous between
//! month and minute. It counts as a month only when no hour or second
//! indicator is present.

use std::fmt;

/// Substrings whose presence marks a format as date/time.
const DATE_TIME_PATTERNS: &[&str] = &[
    "yyyy",
    "yy",
    "mm",
    "dd",
    "hh",
    "ss",
    "m/d",
    "d/m",
    "yyyy-mm-dd",
    "dd-mm-yyyy",
    "mm-dd-yyyy",
    "h:mm",
    "hh:mm:ss",
    "mm:ss",
    "h:mm:ss",
    "yyyy/mm/dd",
    "dd/mm/yyyy",
    "mm/dd/yyyy",
    "general date",
    "long date",
    "medium date",
    "short date",
    "long time",
    "medium time",
    "short time",
];

/// The first format number available to user-defined patterns.
pub const FIRST_CUSTOM_FORMAT: u16 = 164;

/// What a temporal format shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalKind {
    Date,
    Time,
    DateTime,
}

impl TemporalKind {
    /// The fixed pattern used when a plain number cell carries this kind of format.
    pub fn fixed_pattern(self) -> &'static str {
        match self {
            TemporalKind::Date => "yyyy-mm-dd",
            TemporalKind::Time => "hh:mm:ss",
            TemporalKind::DateTime => "yyyy-mm-dd hh:mm:ss",
        }
    }
}

impl fmt::Display for TemporalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TemporalKind::Date => "date",
            TemporalKind::Time => "time",
            TemporalKind::DateTime => "datetime",
        })
    }
}

struct Indicators {
    time: bool,
    year: bool,
    day: bool,
    month: bool,
}

impl Indicators {
    fn scan(lower: &str) -> Self {
        let time = lower.contains('h') || lower.contains("ss");
        Self {
            time,
            year: lower.contains("yy"),
            day: lower.contains('d'),
            month: lower.contains('m') && !time,
        }
    }
}

pub fn is_temporal(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let lower = pattern.to_ascii_lowercase();
    DATE_TIME_PATTERNS.iter().any(|p| lower.contains(p))
}

/// A date with no time of day. Without a year indicator both month and day
/// must be present.
pub fn is_date_only(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let found = Indicators::scan(&pattern.to_ascii_lowercase());
    let has_date = (found.year || found.day || found.month)
        && (found.year || (found.month && found.day));
    has_date && !found.time
}

pub fn is_time_only(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let found = Indicators::scan(&pattern.to_ascii_lowercase());
    found.time && !(found.year || found.day || found.month)
}

/// Classifies a pattern, or `None` when it is not temporal at all.
/// Temporal patterns that are neither date-only nor time-only show both.
pub fn classify(pattern: &str) -> Option<TemporalKind> {
    if !is_temporal(pattern) {
        return None;
    }
    Some(if is_date_only(pattern) {
        TemporalKind::Date
    } else if is_time_only(pattern) {
        TemporalKind::Time
    } else {
        TemporalKind::DateTime
    })
}

/// Number placeholders that keep a custom pattern numeric.
pub fn looks_numeric(pattern: &str) -> bool {
    pattern.eq_ignore_ascii_case("general") || pattern.contains('#') || pattern.contains(".00")
}

/// Built-in formats that display dates or times (BIFF8 reserved numbers).
pub fn is_builtin_datetime(format_number: u16) -> bool {
    matches!(format_number, 14..=17 | 22 | 27..=36 | 50..=58)
}

pub fn is_custom(format_number: u16) -> bool {
    format_number >= FIRST_CUSTOM_FORMAT
}
