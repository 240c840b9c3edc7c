//! Display formatting helpers for countdowns and participant counts.

use chrono::Duration;

/// Render a remaining duration using its two most significant units.
///
/// Examples: "2d 5h", "1h 30m", "4m 10s", "45s". Negative durations clamp
/// to "0s"; the caller is expected to re-classify rather than display a
/// negative countdown.
pub fn compact_duration(remaining: Duration) -> String {
    let total_secs = remaining.num_seconds().max(0);
    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Format a count with thousands separators ("1234567" -> "1,234,567").
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_duration_two_units_max() {
        assert_eq!(
            compact_duration(Duration::days(2) + Duration::hours(5) + Duration::minutes(59)),
            "2d 5h"
        );
        assert_eq!(
            compact_duration(Duration::hours(1) + Duration::minutes(30) + Duration::seconds(59)),
            "1h 30m"
        );
        assert_eq!(
            compact_duration(Duration::minutes(4) + Duration::seconds(10)),
            "4m 10s"
        );
        assert_eq!(compact_duration(Duration::seconds(45)), "45s");
    }

    #[test]
    fn test_compact_duration_boundaries() {
        assert_eq!(compact_duration(Duration::seconds(0)), "0s");
        assert_eq!(compact_duration(Duration::seconds(60)), "1m 0s");
        assert_eq!(compact_duration(Duration::seconds(3600)), "1h 0m");
        assert_eq!(compact_duration(Duration::seconds(86400)), "1d 0h");
    }

    #[test]
    fn test_compact_duration_negative_clamps() {
        assert_eq!(compact_duration(Duration::seconds(-30)), "0s");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_345), "12,345");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
