//! Duration formatting for reports, tables, and status messages.
//!
//! All worked-time values are displayed in the same `H:MM:SS` layout at
//! second precision, e.g. `8:30:00` for eight and a half hours. Hours are not
//! zero-padded so short and long totals read naturally in the same column.

use chrono::Duration;

/// Formats a signed duration as `H:MM:SS`.
///
/// Negative durations (possible when the log has been hand-edited out of
/// order) keep their sign: `-0:15:00`.
///
/// # Examples
///
/// ```
/// use chronolog::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::seconds(8 * 3600 + 30 * 60)), "8:30:00");
/// assert_eq!(format_duration(&Duration::zero()), "0:00:00");
/// assert_eq!(format_duration(&Duration::seconds(-45)), "-0:00:45");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{}{}:{:02}:{:02}", sign, hours, mins, secs)
}

/// Formats an optional duration stored as whole seconds, `-` when absent.
pub fn format_seconds(seconds: Option<i64>) -> String {
    match seconds {
        Some(secs) => format_duration(&Duration::seconds(secs)),
        None => "-".to_string(),
    }
}
