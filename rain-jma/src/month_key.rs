use chrono::{Datelike, NaiveDate};
use std::iter::Iterator;
use std::mem::replace;

/// Calendar month bucket key, a (year, month) pair with month in 1..=12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey(i32, u32);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> MonthKey {
        MonthKey(year, month)
    }

    pub fn from_date(date: NaiveDate) -> MonthKey {
        MonthKey(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.1
    }

    /// The following month's key, rolling the year over after December.
    pub fn succ(&self) -> MonthKey {
        if self.1 == 12 {
            MonthKey(self.0 + 1, 1)
        } else {
            MonthKey(self.0, self.1 + 1)
        }
    }

    /// Number of calendar days in this month.
    pub fn days_in_month(&self) -> i64 {
        let next = self.succ();
        let first = NaiveDate::from_ymd_opt(self.0, self.1, 1).unwrap();
        let next_first = NaiveDate::from_ymd_opt(next.0, next.1, 1).unwrap();
        (next_first - first).num_days()
    }
}

/// Iterator over consecutive months, both endpoints included
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct MonthRange(pub MonthKey, pub MonthKey);

impl Iterator for MonthRange {
    type Item = MonthKey;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0.succ();
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}
