//! Raw value → display value formatting.

use std::fmt::{self, Write as _};

use crate::config::DisplayConfig;
use crate::types::{ColumnType, DisplayValue, RawValue};

/// Format a raw cell for display. Lists become [`DisplayValue::List`] of
/// their non-empty members; everything else is a scalar.
pub fn format(raw: &RawValue, column_type: ColumnType, config: &DisplayConfig) -> DisplayValue {
    match raw {
        RawValue::List(items) => DisplayValue::List(
            items
                .iter()
                .map(|item| format_scalar(item, column_type, config))
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        other => DisplayValue::Scalar(format_scalar(other, column_type, config)),
    }
}

fn format_scalar(raw: &RawValue, column_type: ColumnType, config: &DisplayConfig) -> String {
    match raw {
        RawValue::Null => String::new(),
        RawValue::Text(s) => s.trim().to_string(),
        RawValue::Integer(n) => n.to_string(),
        RawValue::Decimal(d) if d.is_finite() => d.to_string(),
        RawValue::Decimal(_) => String::new(),
        RawValue::Date(date) => strftime(date.format(&config.date_format)),
        // a datetime stored in a date column only shows its date part
        RawValue::DateTime(dt) if column_type == ColumnType::Date => {
            strftime(dt.date().format(&config.date_format))
        }
        RawValue::DateTime(dt) => strftime(dt.format(&config.datetime_format)),
        RawValue::Bool(true) => config.yes.clone(),
        RawValue::Bool(false) => config.no.clone(),
        // nested lists are flattened into a single comma separated entry
        RawValue::List(items) => items
            .iter()
            .map(|item| format_scalar(item, column_type, config))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Render a chrono formatter. A format chrono rejects yields an empty display
/// value; [`DisplayConfig::validate`] catches those when config is loaded.
fn strftime(formatted: impl fmt::Display) -> String {
    let mut out = String::new();
    match write!(out, "{formatted}") {
        Ok(()) => out,
        Err(_) => {
            tracing::warn!("invalid date format, leaving value empty");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scalar(s: &str) -> DisplayValue {
        DisplayValue::Scalar(s.to_string())
    }

    #[rstest]
    #[case::null(RawValue::Null, ColumnType::Text, "")]
    #[case::text_trimmed(RawValue::Text("  Ann ".into()), ColumnType::Text, "Ann")]
    #[case::integer(RawValue::Integer(-42), ColumnType::Integer, "-42")]
    #[case::decimal(RawValue::Decimal(1.50), ColumnType::Decimal, "1.5")]
    #[case::whole_decimal(RawValue::Decimal(2.0), ColumnType::Decimal, "2")]
    #[case::nan(RawValue::Decimal(f64::NAN), ColumnType::Decimal, "")]
    #[case::yes(RawValue::Bool(true), ColumnType::Checkbox, "yes")]
    #[case::no(RawValue::Bool(false), ColumnType::Checkbox, "no")]
    fn scalars_use_defaults(#[case] raw: RawValue, #[case] ty: ColumnType, #[case] expected: &str) {
        assert_eq!(format(&raw, ty, &DisplayConfig::default()), scalar(expected));
    }

    #[test]
    fn dates_follow_configured_format() {
        let config = DisplayConfig {
            date_format: "%d.%m.%Y".to_string(),
            ..DisplayConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format(&RawValue::Date(date), ColumnType::Date, &config), scalar("09.03.2024"));
    }

    #[test]
    fn datetime_in_date_column_drops_time() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        let config = DisplayConfig::default();
        assert_eq!(format(&RawValue::DateTime(dt), ColumnType::Date, &config), scalar("2024-03-09"));
        assert_eq!(
            format(&RawValue::DateTime(dt), ColumnType::DateTime, &config),
            scalar("2024-03-09 14:30")
        );
    }

    #[test]
    fn unvalidated_bad_format_does_not_panic() {
        let config = DisplayConfig {
            date_format: "%Q".to_string(),
            ..DisplayConfig::default()
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format(&RawValue::Date(date), ColumnType::Date, &config), scalar(""));
        assert!(config.validate().is_err());
    }

    #[test]
    fn lists_drop_empty_members() {
        let raw = RawValue::List(vec![
            RawValue::Text("x".into()),
            RawValue::Null,
            RawValue::Text(" ".into()),
            RawValue::Integer(3),
        ]);
        assert_eq!(
            format(&raw, ColumnType::Text, &DisplayConfig::default()),
            DisplayValue::List(vec!["x".to_string(), "3".to_string()])
        );
    }
}
