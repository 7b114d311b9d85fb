/// A daily precipitation reading and its CSV row parsing
use crate::error::{JmaError, Result};
use chrono::NaiveDate;
use csv::StringRecord;
use std::cmp::Ordering;

/// Date formats accepted in the first column, tried in order
pub const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Minimum number of usable columns in a row: date and precipitation
pub const MIN_ROW_LENGTH: usize = 2;

/// One day's precipitation at the station
#[derive(Debug, Clone, Copy)]
pub struct Measurement {
    /// Date the reading covers
    pub date: NaiveDate,
    /// Precipitation in millimeters; `None` when the station reported no value
    pub precipitation: Option<f64>,
}

/// Parse a date field against the accepted formats, first match wins.
pub fn parse_record_date(field: &str) -> Result<NaiveDate> {
    let trimmed = field.trim();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(JmaError::DataFormat(format!(
        "unparseable date: {:?}",
        trimmed
    )))
}

impl TryFrom<StringRecord> for Measurement {
    type Error = JmaError;

    /// Convert one CSV row into a measurement.
    ///
    /// The first column is the date, the second the millimeter amount; an
    /// empty second column is a missing reading. Columns beyond the second
    /// are ignored.
    fn try_from(record: StringRecord) -> Result<Self> {
        if record.len() < MIN_ROW_LENGTH {
            return Err(JmaError::DataFormat(format!(
                "expected at least {} columns, found {}",
                MIN_ROW_LENGTH,
                record.len()
            )));
        }

        let date = parse_record_date(record.get(0).unwrap_or(""))?;

        let amount_field = record.get(1).unwrap_or("").trim();
        let precipitation = if amount_field.is_empty() {
            None
        } else {
            match amount_field.parse::<f64>() {
                Ok(millimeters) => Some(millimeters),
                Err(_) => {
                    return Err(JmaError::DataFormat(format!(
                        "unparseable precipitation value: {:?}",
                        amount_field
                    )))
                }
            }
        };

        Ok(Measurement {
            date,
            precipitation,
        })
    }
}

impl Ord for Measurement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl Eq for Measurement {}

impl PartialEq for Measurement {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl PartialOrd for Measurement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
