//! Time-bucketed spending series
//!
//! Daily and monthly bucket series over explicit windows, and the average
//! daily spend for a period. Bucketing uses calendar dates; days or months
//! with no expenses yield zero buckets.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::HashMap;

use crate::models::{month_bounds, Expense, Money};

/// One day of the daily series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub amount: Money,
}

/// One month of the monthly series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthBucket {
    pub year: i32,
    pub month: u32,
    pub amount: Money,
}

impl MonthBucket {
    /// First day of this bucket's month
    pub fn start(&self) -> NaiveDate {
        month_bounds(self.year, self.month).0
    }

    /// Last day of this bucket's month
    pub fn end(&self) -> NaiveDate {
        month_bounds(self.year, self.month).1
    }

    /// Short label, e.g. "Mar 2024"
    pub fn label(&self) -> String {
        self.start().format("%b %Y").to_string()
    }
}

/// Daily spending over a window of `days` calendar days ending at `end`
/// (inclusive), in chronological order
pub fn daily_series<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    end: NaiveDate,
    days: u32,
) -> Vec<DayBucket> {
    let days = days.max(1);
    let start = end - Duration::days(i64::from(days) - 1);

    let mut by_day: HashMap<NaiveDate, Money> = HashMap::new();
    for expense in expenses {
        if expense.date >= start && expense.date <= end {
            *by_day.entry(expense.date).or_default() += expense.amount;
        }
    }

    (0..days)
        .map(|offset| {
            let date = start + Duration::days(i64::from(offset));
            DayBucket {
                date,
                amount: by_day.get(&date).copied().unwrap_or_default(),
            }
        })
        .collect()
}

/// Monthly spending over a window of `months` calendar months ending with
/// the month containing `end`, in chronological order
pub fn monthly_series<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    end: NaiveDate,
    months: u32,
) -> Vec<MonthBucket> {
    let months = months.max(1);

    // Walk back to the first month of the window, then forward one bucket
    // per month.
    let mut keys: Vec<(i32, u32)> = Vec::with_capacity(months as usize);
    let (mut year, mut month) = (end.year(), end.month());
    for _ in 0..months {
        keys.push((year, month));
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    keys.reverse();

    let mut by_month: HashMap<(i32, u32), Money> = HashMap::new();
    for expense in expenses {
        let key = (expense.date.year(), expense.date.month());
        *by_month.entry(key).or_default() += expense.amount;
    }

    keys.into_iter()
        .map(|(year, month)| MonthBucket {
            year,
            month,
            amount: by_month.get(&(year, month)).copied().unwrap_or_default(),
        })
        .collect()
}

/// Average daily spend: the total divided by the number of days spanned by
/// the period, with a minimum divisor of 1 so same-day ranges are defined
pub fn average_daily(total: Money, from: NaiveDate, to: NaiveDate) -> Money {
    let days = (to - from).num_days().max(1);
    // Round to the nearest cent.
    Money::from_cents((total.cents() + days / 2) / days)
}
