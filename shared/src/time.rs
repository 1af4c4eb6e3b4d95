use chrono::DateTime;

/// Display layout of a timestamp, matching the en-GB locale in UTC.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Formats a timestamp given in milliseconds since the Unix epoch.
///
/// Values chrono cannot represent (NaN, infinities, far out of range) are
/// rendered as plain numbers.
pub fn format_timestamp(timestamp_ms: f64) -> String {
    if !timestamp_ms.is_finite() {
        return timestamp_ms.to_string();
    }

    match DateTime::from_timestamp_millis(timestamp_ms.trunc() as i64) {
        Some(when) => when.format(DISPLAY_FORMAT).to_string(),
        None => timestamp_ms.to_string(),
    }
}
