use chrono::NaiveTime;

/// 12-hour clock without a leading zero, e.g. `7:00 AM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn format_range(high: i32, low: i32) -> String {
    format!("{high}°/{low}°")
}
