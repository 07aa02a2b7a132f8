use chrono::{DateTime, FixedOffset};

/// Format seconds as "10h 0m 0s", "5m 3s" or "42s"
pub fn format_duration_secs(total: i64) -> String {
    let total = total.max(0);
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// "2025-01-01 08:00:00" in the instant's own offset
pub fn format_wall_time(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "2025-01-01 08:00"
pub fn format_minute(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// "2025-01-01 08:00:00 +01:00"
pub fn format_event_time(ts: &DateTime<FixedOffset>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}
