//! Display formatting for feed timestamps

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse a feed timestamp.
///
/// Accepts RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS` (taken as UTC, the
/// converter's format) and a bare `YYYY-MM-DD`.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Long-form date, e.g. "January 15, 2024". Unrecognised input is returned as-is.
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// Coarse age relative to `now`: "Today", "Yesterday", "3 days ago",
/// "2 weeks ago", "5 months ago", "1 years ago".
///
/// Timestamps in the future read as "Today". Unrecognised input is returned as-is.
pub fn format_relative_date(value: &str, now: DateTime<Utc>) -> String {
    let Some(dt) = parse_timestamp(value) else {
        return value.to_string();
    };

    let days = (now - dt).num_days();

    match days {
        d if d <= 0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        d if d < 7 => format!("{} days ago", d),
        d if d < 30 => format!("{} weeks ago", d / 7),
        d if d < 365 => format!("{} months ago", d / 30),
        d => format!("{} years ago", d / 365),
    }
}
