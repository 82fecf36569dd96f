use chrono::{DateTime, NaiveDate};
use polars::prelude::{AnyValue, DataFrame, TimeUnit};

use crate::error::{PlotError, Result};

/// Days between 0001-01-01 (CE) and the Unix epoch.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Extract a timestamp column as plot-ready strings.
///
/// Polars `Date`, `Datetime` and string columns are all accepted; anything
/// else falls back to the value's display form. The returned vector is an
/// owned copy, the frame itself is never touched.
pub fn timestamp_column_to_strings(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;

    let mut values = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let value = match column.get(i)? {
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            AnyValue::Date(days) => NaiveDate::from_num_days_from_ce_opt(
                days.checked_add(EPOCH_DAYS_FROM_CE).ok_or_else(|| {
                    PlotError::Date(format!("Date value out of range at row {}: {}", i, days))
                })?,
            )
            .ok_or_else(|| {
                PlotError::Date(format!("Invalid date value at row {}: {}", i, days))
            })?
            .to_string(),
            AnyValue::Datetime(ts, unit, _) => datetime_to_string(ts, unit, i)?,
            AnyValue::DatetimeOwned(ts, unit, _) => datetime_to_string(ts, unit, i)?,
            other => format!("{}", other),
        };
        values.push(value);
    }

    Ok(values)
}

/// Extract a numeric column as `f64` values. Nulls become NaN, which
/// plotly renders as a gap rather than a point.
pub fn numeric_column_to_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let column = df.column(name)?;

    let mut values = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let value = match column.get(i)? {
            AnyValue::Null => f64::NAN,
            other => other.try_extract::<f64>()?,
        };
        values.push(value);
    }

    Ok(values)
}

/// Render a raw Polars datetime as a string, honoring the column's time unit.
fn datetime_to_string(ts: i64, unit: TimeUnit, row: usize) -> Result<String> {
    let (secs, nanos) = match unit {
        TimeUnit::Nanoseconds => (ts.div_euclid(1_000_000_000), ts.rem_euclid(1_000_000_000)),
        TimeUnit::Microseconds => (ts.div_euclid(1_000_000), ts.rem_euclid(1_000_000) * 1_000),
        TimeUnit::Milliseconds => (ts.div_euclid(1_000), ts.rem_euclid(1_000) * 1_000_000),
    };
    let datetime = DateTime::from_timestamp(secs, nanos as u32).ok_or_else(|| {
        PlotError::Date(format!("Invalid datetime value at row {}: {}", row, ts))
    })?;
    Ok(datetime.naive_utc().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn string_timestamps_pass_through() {
        let df = df!(
            "ds" => ["2024-01-01", "2024-01-02", "2024-01-03"],
        )
        .unwrap();

        let values = timestamp_column_to_strings(&df, "ds").unwrap();
        assert_eq!(values, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn date_column_formats_as_iso_dates() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        ];
        let df = df!("ds" => dates).unwrap();

        let values = timestamp_column_to_strings(&df, "ds").unwrap();
        assert_eq!(values, vec!["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn integer_column_extracts_as_f64() {
        let df = df!("yhat" => [1i64, 2, 3]).unwrap();

        let values = numeric_column_to_f64(&df, "yhat").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn null_values_become_nan() {
        let df = df!("yhat" => [Some(1.0f64), None, Some(3.0)]).unwrap();

        let values = numeric_column_to_f64(&df, "yhat").unwrap();
        assert_eq!(values[0], 1.0);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 3.0);
    }

    #[test]
    fn missing_column_is_a_dataframe_error() {
        let df = df!("ds" => ["2024-01-01"]).unwrap();

        let err = numeric_column_to_f64(&df, "yhat").unwrap_err();
        assert!(matches!(err, PlotError::DataFrame(_)));
    }
}
