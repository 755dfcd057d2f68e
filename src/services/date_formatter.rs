use chrono::{DateTime, SecondsFormat, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Largest unit first; the first unit that fits at least once wins
const UNITS: [(i64, &str); 7] = [
    (YEAR, "year"),
    (MONTH, "month"),
    (WEEK, "week"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
    (1, "second"),
];

fn to_datetime(timestamp: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp, 0).unwrap_or_default()
}

/// Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in UTC
pub fn format_datetime(timestamp: i64) -> String {
    to_datetime(timestamp).format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a Unix timestamp as RFC 3339 with second precision
pub fn format_iso(timestamp: i64) -> String {
    to_datetime(timestamp).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render `timestamp` relative to `now`, e.g. "3 minutes ago"
///
/// Times after `now` read "... from now". A zero difference is reported
/// as one second.
pub fn diff_for_humans(timestamp: i64, now: i64) -> String {
    let delta = now.saturating_sub(timestamp);
    let seconds = delta.saturating_abs();

    let (count, unit) = UNITS
        .iter()
        .find(|(size, _)| seconds >= *size)
        .map(|(size, unit)| (seconds / size, *unit))
        .unwrap_or((1, "second"));

    let plural = if count == 1 { "" } else { "s" };
    let direction = if delta < 0 { "from now" } else { "ago" };

    format!("{} {}{} {}", count, unit, plural, direction)
}
