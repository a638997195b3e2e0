//! Cell value formatting

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::config::TableConfig;
use crate::model::Value;

/// Formats a cell value for display.
///
/// Dates older than the configured cutoff include the year; recent dates
/// drop it. Both are shown in UTC.
pub fn format_value(value: &Value, config: &TableConfig) -> String {
    format_value_at(value, config, Utc::now())
}

/// Same as [`format_value`] with an explicit "now".
pub fn format_value_at(value: &Value, config: &TableConfig, now: DateTime<Utc>) -> String {
    match value {
        Value::Null => String::new(),
        Value::Unavailable => config.unavailable_text.clone(),
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::DateTime(date) => format_date(date, config.date_cutoff, now),
        other => other.to_string(),
    }
}

fn format_date(date: &DateTime<Utc>, cutoff: Duration, now: DateTime<Utc>) -> String {
    if *date < now - cutoff {
        date.format("%Y %b %d %H:%M UTC").to_string()
    } else {
        date.format("%b %d, %H:%M UTC").to_string()
    }
}
