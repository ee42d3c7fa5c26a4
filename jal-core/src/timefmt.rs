//! Relative-time labels for dashboard activity rows.

use chrono::{DateTime, Utc};

/// Label for how long ago `t` was ("just now", "5 minutes ago", ...).
/// Anything a week old or older falls back to a plain date.
pub fn relative(t: DateTime<Utc>) -> String {
    relative_from(t, Utc::now())
}

/// Testable variant of [`relative`] with an explicit reference instant.
pub fn relative_from(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Clock skew can put server timestamps slightly in the future.
    let secs = (now - t).num_seconds().max(0);
    if secs < 60 {
        return "just now".to_string();
    }
    let minutes = secs / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }
    t.format("%d %b %Y").to_string()
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs_ago: i64) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        (now - chrono::Duration::seconds(secs_ago), now)
    }

    #[test]
    fn under_a_minute_is_just_now() {
        let (t, now) = at(0);
        assert_eq!(relative_from(t, now), "just now");
        let (t, now) = at(59);
        assert_eq!(relative_from(t, now), "just now");
    }

    #[test]
    fn minutes_under_an_hour() {
        let (t, now) = at(60);
        assert_eq!(relative_from(t, now), "1 minute ago");
        let (t, now) = at(45 * 60);
        assert_eq!(relative_from(t, now), "45 minutes ago");
    }

    #[test]
    fn hours_under_a_day() {
        let (t, now) = at(2 * 3600);
        assert_eq!(relative_from(t, now), "2 hours ago");
        let (t, now) = at(23 * 3600 + 59 * 60);
        assert_eq!(relative_from(t, now), "23 hours ago");
    }

    #[test]
    fn days_under_a_week() {
        let (t, now) = at(24 * 3600);
        assert_eq!(relative_from(t, now), "1 day ago");
        let (t, now) = at(6 * 24 * 3600);
        assert_eq!(relative_from(t, now), "6 days ago");
    }

    #[test]
    fn a_week_or_older_shows_the_date() {
        let (t, now) = at(7 * 24 * 3600);
        assert_eq!(relative_from(t, now), "08 Jun 2024");
    }

    #[test]
    fn future_timestamps_clamp_to_just_now() {
        let (t, now) = at(-30);
        assert_eq!(relative_from(t, now), "just now");
    }
}
