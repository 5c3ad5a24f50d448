//! Display formatting and small collection helpers.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;

/// Format whole seconds as M:SS, or H:MM:SS past an hour.
pub fn format_duration(secs: u32) -> String {
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let secs = secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Format an optional duration, `--:--` when unknown.
pub fn format_optional_duration(secs: Option<u32>) -> String {
    secs.map(format_duration).unwrap_or_else(|| "--:--".to_string())
}

/// Relative timestamp such as "30m ago" or "2h ago".
///
/// Timestamps in the future are treated as "just now". Anything older than
/// a week falls back to a calendar date.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - timestamp).num_seconds().max(0);

    match secs {
        0..60 => "just now".to_string(),
        60..3600 => format!("{}m ago", secs / 60),
        3600..86_400 => format!("{}h ago", secs / 3600),
        86_400..604_800 => format!("{}d ago", secs / 86_400),
        _ => timestamp.format("%b %-d, %Y").to_string(),
    }
}

/// Calendar date used on playlist cards.
pub fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y").to_string()
}

/// Return a shuffled copy of `items` (Fisher-Yates).
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(&mut rand::rng());
    out
}

/// First character of a display name, for image placeholders.
pub fn initial(name: &str, uppercase: bool) -> String {
    match name.chars().next() {
        Some(c) if uppercase => c.to_uppercase().collect(),
        Some(c) => c.to_string(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(210), "3:30");
        assert_eq!(format_duration(3661), "1:01:01");
    }

    #[test]
    fn test_format_optional_duration() {
        assert_eq!(format_optional_duration(Some(185)), "3:05");
        assert_eq!(format_optional_duration(None), "--:--");
    }

    #[test]
    fn test_format_time_ago() {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 12, 0, 0).unwrap();
        assert_eq!(format_time_ago(now, now), "just now");
        assert_eq!(format_time_ago(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(format_time_ago(now - Duration::hours(2), now), "2h ago");
        assert_eq!(format_time_ago(now - Duration::days(3), now), "3d ago");
        assert_eq!(
            format_time_ago(now - Duration::days(30), now),
            "Dec 21, 2023"
        );
        // Clock skew: a future timestamp is not negative time
        assert_eq!(format_time_ago(now + Duration::minutes(5), now), "just now");
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let items: Vec<u32> = (0..20).collect();
        let mut out = shuffled(&items);
        assert_eq!(out.len(), items.len());
        out.sort();
        assert_eq!(out, items);
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("midnight Vibes", false), "m");
        assert_eq!(initial("beatMaster", true), "B");
        assert_eq!(initial("", true), "?");
    }
}
