use chrono::{DateTime, Datelike, Utc};

/// Format a timestamp for list views relative to now:
/// - under a week: "just now", "12m ago", "3h ago", "5d ago"
/// - older: "Jan 15" this year, "Dec 3, 2024" otherwise
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*timestamp);

    if elapsed.num_days() >= 7 {
        if timestamp.year() == now.year() {
            return timestamp.format("%b %-d").to_string();
        }
        return timestamp.format("%b %-d, %Y").to_string();
    }

    // Future timestamps (clock skew) read as "just now"
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

/// Full date and minute, e.g. "Mar 1, 2024 10:00" (UTC)
pub fn format_absolute_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y %H:%M").to_string()
}
