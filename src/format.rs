//! Display Formatting
//!
//! Pure helpers turning API values into table/card text.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Placeholder for absent values
pub const DASH: &str = "-";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Server timestamp → local display time.
///
/// Offset-aware timestamps are converted to local time; naive ones are
/// already local to the server and shown as-is. Anything unparseable is
/// shown raw.
pub fn timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn opt_timestamp(raw: Option<&str>) -> String {
    raw.map(timestamp).unwrap_or_else(|| DASH.to_string())
}

/// Text or `-` when missing/blank
pub fn or_dash(text: Option<&str>) -> String {
    match text {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => DASH.to_string(),
    }
}

/// Average scores: two decimals
pub fn score(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| DASH.to_string())
}

/// Overall report score as sent
pub fn plain_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| DASH.to_string())
}

/// Seconds with unit; zero is a real value
pub fn seconds(value: Option<f64>) -> String {
    value.map(|v| format!("{}s", v)).unwrap_or_else(|| DASH.to_string())
}

/// Call duration; zero means the duration is not known yet
pub fn duration(value: Option<f64>) -> String {
    seconds(value.filter(|v| *v != 0.0))
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// `calls_2024-05-01.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

/// Today's date in UTC, used in export file names
pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// QA score cell: strings unquoted, everything else as compact JSON
pub fn score_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_naive_timestamps() {
        assert_eq!(timestamp("2024-05-01T09:30:00"), "2024-05-01 09:30:00");
        assert_eq!(timestamp("2024-05-01T09:30:00.123456"), "2024-05-01 09:30:00");
        assert_eq!(timestamp("2024-05-01 09:30:00"), "2024-05-01 09:30:00");
    }

    #[test]
    fn test_aware_timestamp_is_reformatted() {
        let shown = timestamp("2024-05-01T09:30:00Z");
        assert_eq!(shown.len(), "2024-05-01 09:30:00".len());
        assert!(!shown.contains('T'));
    }

    #[test]
    fn test_unparseable_timestamp_is_raw() {
        assert_eq!(timestamp("yesterday"), "yesterday");
        assert_eq!(opt_timestamp(None), "-");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(score(Some(7.456)), "7.46");
        assert_eq!(score(Some(8.0)), "8.00");
        assert_eq!(score(None), "-");
        assert_eq!(plain_number(Some(8.5)), "8.5");
        assert_eq!(plain_number(Some(9.0)), "9");
        assert_eq!(seconds(Some(0.0)), "0s");
        assert_eq!(seconds(Some(12.5)), "12.5s");
        assert_eq!(seconds(None), "-");
        assert_eq!(duration(Some(0.0)), "-");
        assert_eq!(duration(Some(312.0)), "312s");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Dana")), "Dana");
        assert_eq!(or_dash(Some("")), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(export_file_name("calls", date), "calls_2024-05-01.csv");
        assert_eq!(export_file_name("agent_performance", date), "agent_performance_2024-05-01.csv");
    }

    #[test]
    fn test_score_value() {
        assert_eq!(score_value(&json!("partial")), "partial");
        assert_eq!(score_value(&json!(9)), "9");
        assert_eq!(score_value(&json!(true)), "true");
        assert_eq!(score_value(&json!({"score": 4, "max": 5})), r#"{"score":4,"max":5}"#);
    }
}
