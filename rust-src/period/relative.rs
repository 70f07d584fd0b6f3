//! Human-relative timestamps ("3 days ago").

use chrono::{DateTime, NaiveDate, Utc};


/// Parse an ISO 8601 timestamp or a bare `YYYY-MM-DD` date.
///
/// Bare dates are taken as UTC midnight.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}


/// Describe how long ago `iso_date` was, relative to `now`.
///
/// Empty, unparseable and future inputs all read as "now".
pub fn relative_time(iso_date: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse_timestamp(iso_date) else {
        return "now".to_string();
    };

    let elapsed = now - then;
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }

    let days = elapsed.num_days();
    if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural(days / 7, "week")
    } else {
        plural(days / 30, "month")
    }
}


fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
