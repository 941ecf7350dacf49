/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, Utc};

/// Format a server timestamp to DD.MM.YYYY HH:MM:SS
/// Example: 2023-01-03T10:13:22Z -> "03.01.2023 10:13:22"
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M:%S").to_string()
}

/// Format an optional server timestamp; missing value renders as a dash
pub fn format_timestamp_opt(value: &Option<DateTime<Utc>>) -> String {
    value
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "-".to_string())
}
