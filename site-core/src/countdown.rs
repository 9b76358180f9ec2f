//! Countdown arithmetic, page date parsing and the footer year.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub const DEFAULT_TICK_MS: u32 = 1000;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const LOCAL_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Minute-precision date-times with a numeric offset. RFC 3339 covers the
/// variants that carry seconds.
const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Parse a date the way the page markup writes them.
///
/// Offsets (numeric or `Z`) are honored, date-times without one are local,
/// and date-only forms (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) are midnight UTC on
/// the first missing unit, as browsers read them.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    parse_datetime_in(raw, &Local)
}

pub fn parse_datetime_in<Tz: TimeZone>(raw: &str, zone: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_zoned(raw) {
        return Some(parsed);
    }

    if let Some(naive) = parse_naive(raw) {
        return zone
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc));
    }

    parse_date_only(raw).map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn parse_zoned(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(utc) = raw.strip_suffix(['Z', 'z']) {
        return parse_naive(utc).map(|naive| Utc.from_utc_datetime(&naive));
    }
    ZONED_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn parse_date_only(raw: &str) -> Option<NaiveDateTime> {
    let padded = match raw.len() {
        4 => format!("{raw}-01-01"),
        7 => format!("{raw}-01"),
        10 => raw.to_string(),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Target for a countdown container: a missing or unparseable value
/// collapses to `now`, which renders as an expired countdown.
pub fn resolve_target(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(parse_datetime).unwrap_or(now)
}

pub fn current_year<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    now.year().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn from_millis(diff: i64) -> Self {
        if diff <= 0 {
            return Self::default();
        }
        Self {
            days: diff / MS_PER_DAY,
            hours: (diff / MS_PER_HOUR) % 24,
            minutes: (diff / MS_PER_MINUTE) % 60,
            seconds: (diff / MS_PER_SECOND) % 60,
        }
    }

    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_millis((target - now).num_milliseconds())
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Days, hours, minutes, seconds; each zero-padded to two digits.
    pub fn fields(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(|v| format!("{v:02}"))
    }
}
