//! Period spending summary
//!
//! Combines the aggregation primitives into the headline figures for a
//! period: total spent, transaction count, average daily spend, and the
//! top category. One implementation shared by every consumer, instead of
//! each view recomputing its own.

use chrono::NaiveDate;

use crate::analytics::aggregate::{top_category, total};
use crate::analytics::filter::DateRange;
use crate::analytics::series::average_daily;
use crate::models::{CategoryId, Expense, Money};

/// Headline spending figures for a period
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingSummary {
    pub range: DateRange,
    pub total: Money,
    pub transaction_count: usize,
    pub average_daily: Money,
    /// Highest-spending category and its total, if any expenses exist
    pub top_category: Option<(CategoryId, Money)>,
}

impl SpendingSummary {
    /// Compute the summary for the expenses falling within `range`
    pub fn compute(expenses: &[Expense], range: DateRange) -> Self {
        let in_range: Vec<&Expense> = expenses
            .iter()
            .filter(|e| range.contains(e.date))
            .collect();

        let total = total(in_range.iter().copied());

        Self {
            range,
            total,
            transaction_count: in_range.len(),
            average_daily: average_daily(total, range.from, range.to),
            top_category: top_category(in_range.iter().copied()),
        }
    }

    /// Convenience: summary for the trailing window of `days` days ending
    /// at `today`
    pub fn for_trailing_days(expenses: &[Expense], today: NaiveDate, days: u32) -> Self {
        let days = days.max(1);
        let from = today - chrono::Duration::days(i64::from(days) - 1);
        Self::compute(expenses, DateRange::new(from, today))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, UserId};

    fn expense(cents: i64, category: &str, date: NaiveDate) -> Expense {
        Expense::from_draft(
            UserId::from_raw("local"),
            ExpenseDraft {
                amount: Money::from_cents(cents),
                category: CategoryId::from_raw(category),
                subcategory: None,
                description: "test".to_string(),
                date,
                payment_method: "cash".to_string(),
                tags: vec![],
            },
        )
    }

    #[test]
    fn test_summary() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let expenses = vec![
            expense(1000, "food", d(1)),
            expense(500, "transport", d(5)),
            expense(2000, "food", d(10)),
            // Outside the range below
            expense(9999, "travel", d(25)),
        ];

        let summary = SpendingSummary::compute(&expenses, DateRange::new(d(1), d(11)));

        assert_eq!(summary.total.cents(), 3500);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.average_daily.cents(), 350);

        let (top_id, top_amount) = summary.top_category.unwrap();
        assert_eq!(top_id, CategoryId::from_raw("food"));
        assert_eq!(top_amount.cents(), 3000);
    }

    #[test]
    fn test_summary_of_empty_period() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let summary = SpendingSummary::compute(&[], DateRange::new(d(1), d(31)));

        assert!(summary.total.is_zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.average_daily.is_zero());
        assert!(summary.top_category.is_none());
    }

    #[test]
    fn test_trailing_days_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 30).unwrap();
        let expenses = vec![
            expense(1000, "food", today),
            expense(1000, "food", today - chrono::Duration::days(29)),
            expense(1000, "food", today - chrono::Duration::days(30)),
        ];

        let summary = SpendingSummary::for_trailing_days(&expenses, today, 30);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.total.cents(), 2000);
    }
}
