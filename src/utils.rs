// Utility functions
use chrono::{DateTime, Utc};

/// Parses an RFC 3339 string into `DateTime<Utc>`, if possible.
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Rounds the exact binary value to `decimals` places, ties to even.
/// `87.25` is exactly representable and rounds down to `87.2`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}

/// Truncates to at most `max_chars` characters, appending "..." when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
