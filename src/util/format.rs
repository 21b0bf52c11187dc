//! Display helpers for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO-8601 timestamp (`2024-05-01T10:30:00`) as a compact
/// `2024-05-01 10:30`. Anything that does not look like a timestamp is
/// returned unchanged; this is display-only, never parsed back.
pub fn format_timestamp(raw: &str) -> String {
    match raw.split_once('T') {
        Some((date, time)) => {
            let minutes = time.get(..5).unwrap_or(time);
            format!("{date} {minutes}")
        }
        None => raw.to_owned(),
    }
}
