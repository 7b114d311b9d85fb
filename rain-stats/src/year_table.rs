//! Month-by-year pivot of a monthly aggregate, the direct input to the
//! grouped bar charts.

use crate::monthly::MonthlyAggregate;

/// One year of monthly values; position `i` holds calendar month `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct YearColumn<T> {
    pub year: i32,
    pub months: [Option<T>; 12],
}

/// Month rows by year columns, years ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct YearTable<T> {
    pub columns: Vec<YearColumn<T>>,
}

impl<T: Copy> YearTable<T> {
    /// Pivot `aggregate` into one column per year of `[start_year, end_year)`.
    /// The upper year is excluded; an empty range yields an empty table.
    pub fn from_aggregate(
        aggregate: &MonthlyAggregate<T>,
        start_year: i32,
        end_year: i32,
    ) -> YearTable<T> {
        let mut columns = Vec::new();
        for year in start_year..end_year {
            columns.push(YearColumn {
                year,
                months: aggregate.extract_year(year),
            });
        }
        YearTable { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T: Copy + Into<f64>> YearTable<T> {
    /// Largest cell value in the table, for y-axis scaling.
    pub fn max_value(&self) -> Option<f64> {
        let mut result: Option<f64> = None;
        for column in &self.columns {
            for value in column.months.iter().flatten() {
                let v: f64 = (*value).into();
                result = Some(match result {
                    Some(current) => current.max(v),
                    None => v,
                });
            }
        }
        result
    }
}
