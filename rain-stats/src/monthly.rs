//! Monthly bucketing of a precipitation series.
//!
//! Both aggregates share one span policy: every calendar month between the
//! series' first and last date gets a bucket, present with zero when no row
//! contributes; months outside the span are absent. Partial first and last
//! months are bucketed with whatever days they have.

use rain_jma::month_key::{MonthKey, MonthRange};
use rain_jma::series::RainfallSeries;
use std::collections::BTreeMap;

/// Per-month scalar derived from a series: millimeter sums or day counts.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate<T> {
    pub values: BTreeMap<MonthKey, T>,
}

impl<T: Copy> MonthlyAggregate<T> {
    /// The 12 values for one calendar year, January first. Months this
    /// aggregate has no entry for are `None`.
    pub fn extract_year(&self, year: i32) -> [Option<T>; 12] {
        let mut months = [None; 12];
        for (index, slot) in months.iter_mut().enumerate() {
            let key = MonthKey::new(year, index as u32 + 1);
            *slot = self.values.get(&key).copied();
        }
        months
    }
}

/// Sum of recorded millimeters per calendar month across the series span.
pub fn monthly_totals(series: &RainfallSeries) -> MonthlyAggregate<f64> {
    let mut values: BTreeMap<MonthKey, f64> = BTreeMap::new();
    for measurement in &series.measurements {
        if let Some(millimeters) = measurement.precipitation {
            values
                .entry(MonthKey::from_date(measurement.date))
                .and_modify(|e| *e += millimeters)
                .or_insert(millimeters);
        }
    }
    backfill_span(&mut values, series, 0.0);
    MonthlyAggregate { values }
}

/// Days per calendar month with precipitation strictly greater than
/// `threshold` millimeters.
pub fn rainy_day_counts(series: &RainfallSeries, threshold: f64) -> MonthlyAggregate<u32> {
    let mut values: BTreeMap<MonthKey, u32> = BTreeMap::new();
    for measurement in &series.measurements {
        if let Some(millimeters) = measurement.precipitation {
            if millimeters > threshold {
                values
                    .entry(MonthKey::from_date(measurement.date))
                    .and_modify(|e| *e += 1)
                    .or_insert(1);
            }
        }
    }
    backfill_span(&mut values, series, 0);
    MonthlyAggregate { values }
}

/// Insert `zero` for every month of the series span the accumulation pass
/// did not touch.
fn backfill_span<T: Copy>(values: &mut BTreeMap<MonthKey, T>, series: &RainfallSeries, zero: T) {
    let span = MonthRange(
        MonthKey::from_date(series.start_date),
        MonthKey::from_date(series.end_date),
    );
    for key in span {
        values.entry(key).or_insert(zero);
    }
}
