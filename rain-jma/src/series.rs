//! Daily precipitation series loaded from a JMA download CSV.
//!
//! The expected format (no headers, header row already stripped):
//! `date,precipitation_mm` with any further columns ignored. Dates may be
//! `YYYY-MM-DD`, `YYYY/MM/DD`, or `YYYYMMDD`; an empty millimeter field is
//! a missing reading.

use crate::error::{JmaError, Result};
use crate::measurement::Measurement;
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use std::path::Path;

/// A station's daily record, sorted ascending with unique dates.
///
/// Construction rejects an empty record, so `start_date` and `end_date`
/// always name the first and last measurement.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallSeries {
    pub measurements: Vec<Measurement>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl RainfallSeries {
    /// Load a series from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<RainfallSeries> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(JmaError::NotFound(path.to_path_buf()));
        }
        let csv_data = std::fs::read_to_string(path)?;
        Self::from_csv_str(&csv_data)
    }

    /// Parse a series from CSV data already in memory.
    pub fn from_csv_str(csv_data: &str) -> Result<RainfallSeries> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut measurements = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            let record = result?;
            match Measurement::try_from(record) {
                Ok(measurement) => measurements.push(measurement),
                Err(JmaError::DataFormat(message)) => {
                    return Err(JmaError::DataFormat(format!(
                        "row {}: {}",
                        index + 1,
                        message
                    )))
                }
                Err(e) => return Err(e),
            }
        }
        Self::from_measurements(measurements)
    }

    /// Build a series from raw measurements: sort by date, drop duplicate
    /// dates keeping the first occurrence, reject an empty result.
    pub fn from_measurements(mut measurements: Vec<Measurement>) -> Result<RainfallSeries> {
        measurements.sort();
        measurements.dedup();
        let (start_date, end_date) = match (measurements.first(), measurements.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(JmaError::EmptySeries),
        };
        log::info!(
            "loaded {} measurements from {} to {}",
            measurements.len(),
            start_date,
            end_date
        );
        Ok(RainfallSeries {
            measurements,
            start_date,
            end_date,
        })
    }

    /// Year of the earliest measurement.
    pub fn start_year(&self) -> i32 {
        self.start_date.year()
    }

    /// Year of the latest measurement.
    pub fn end_year(&self) -> i32 {
        self.end_date.year()
    }

    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_and_sorts_unordered_rows() {
        let csv = "\
2022-01-15,5.0
2022-01-01,0.0
2022-02-10,0.0
";
        let series = RainfallSeries::from_csv_str(csv).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.start_date,
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
        );
        assert_eq!(
            series.end_date,
            NaiveDate::from_ymd_opt(2022, 2, 10).unwrap()
        );
        let dates: Vec<NaiveDate> = series.measurements.iter().map(|m| m.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn duplicate_dates_keep_first_occurrence() {
        let csv = "\
2022-01-02,4.0
2022-01-01,1.0
2022-01-02,9.0
";
        let series = RainfallSeries::from_csv_str(csv).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.measurements[1].precipitation, Some(4.0));
    }

    #[test]
    fn missing_values_are_kept_as_none() {
        let csv = "\
2022-01-01,2.5
2022-01-02,
2022-01-03,0.0
";
        let series = RainfallSeries::from_csv_str(csv).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.measurements[1].precipitation, None);
    }

    #[test]
    fn mixed_date_formats_parse() {
        let csv = "\
2021/12/31,1.0
20220101,2.0
2022-01-02,3.0
";
        let series = RainfallSeries::from_csv_str(csv).unwrap();
        assert_eq!(series.start_year(), 2021);
        assert_eq!(series.end_year(), 2022);
    }

    #[test]
    fn bad_date_reports_row_number() {
        let csv = "\
2022-01-01,2.5
bogus,1.0
";
        let err = RainfallSeries::from_csv_str(csv).unwrap_err();
        match err {
            JmaError::DataFormat(message) => {
                assert!(message.contains("row 2"), "message was: {message}");
            }
            other => panic!("expected DataFormat, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_data_format_error() {
        let csv = "\
2022-01-01,2.5
2022-01-02
";
        let err = RainfallSeries::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, JmaError::DataFormat(_)));
    }

    #[test]
    fn empty_input_is_empty_series_error() {
        let err = RainfallSeries::from_csv_str("").unwrap_err();
        assert!(matches!(err, JmaError::EmptySeries));
    }

    #[test]
    fn empty_measurement_vector_is_empty_series_error() {
        let err = RainfallSeries::from_measurements(Vec::new()).unwrap_err();
        assert!(matches!(err, JmaError::EmptySeries));
    }

    #[test]
    fn loads_from_a_real_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2022-01-01,0.0\n2022-01-02,3.5\n").unwrap();
        let series = RainfallSeries::from_csv_path(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn missing_path_is_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-file.csv");
        let err = RainfallSeries::from_csv_path(&path).unwrap_err();
        assert!(matches!(err, JmaError::NotFound(_)));
    }
}
