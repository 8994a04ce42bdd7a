use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

/// Axis label for a monthly bucket, e.g. "Jan 2024"
pub const MONTH_LABEL_FORMAT: &str = "%b %Y";
/// Axis label for a single day, e.g. "15/03"
pub const DAY_LABEL_FORMAT: &str = "%d/%m";
/// Timestamp printed in the insights report header
pub const REPORT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Parse the date part of an ISO date or RFC 3339 timestamp.
///
/// The dashboard API emits plain `YYYY-MM-DD` strings for generated data and
/// full timestamps for SQL `DATE_TRUNC` buckets; both collapse to the same day.
pub fn parse_date_prefix(value: &str) -> Result<NaiveDate> {
    let prefix = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{value}', expected YYYY-MM-DD"))
}

pub fn deserialize_date_prefix<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_prefix(&raw).map_err(serde::de::Error::custom)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First days of the `count` calendar months ending with the month of `today`, oldest first
pub fn trailing_month_starts(today: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let current = month_start(today);
    (0..count)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

pub fn format_month_label(date: &NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

pub fn format_day_label(date: &NaiveDate) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}

pub fn format_report_timestamp(datetime: &NaiveDateTime) -> String {
    datetime.format(REPORT_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = parse_date_prefix("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_timestamp_prefix() {
        let date = parse_date_prefix("2024-03-01T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_date_prefix("03/15/2024").is_err());
        assert!(parse_date_prefix("").is_err());
    }

    #[test]
    fn test_trailing_month_starts_crosses_year() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let months = trailing_month_starts(today, 6);
        let expected: Vec<NaiveDate> = [(2023, 9), (2023, 10), (2023, 11), (2023, 12), (2024, 1), (2024, 2)]
            .iter()
            .map(|(y, m)| NaiveDate::from_ymd_opt(*y, *m, 1).unwrap())
            .collect();
        assert_eq!(months, expected);
    }

    #[test]
    fn test_trailing_month_starts_on_the_31st() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let months = trailing_month_starts(today, 2);
        assert_eq!(months[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(months[1], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_label_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_month_label(&date), "Mar 2024");
        assert_eq!(format_day_label(&date), "05/03");

        let dt = date.and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_report_timestamp(&dt), "05/03/2024 14:30");
    }
}
