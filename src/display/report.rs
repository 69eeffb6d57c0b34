//! Spending report formatting
//!
//! Plain-text rendering of summaries and the daily/monthly series, with a
//! simple proportional bar for the series views.

use crate::analytics::{DayBucket, MonthBucket, SpendingSummary};
use crate::models::Money;
use crate::store::LedgerStore;

const BAR_WIDTH: usize = 40;

/// Format the headline summary figures for a period
pub fn format_summary(summary: &SpendingSummary, store: &LedgerStore) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Spending Summary: {} to {}\n",
        summary.range.from, summary.range.to
    ));
    output.push_str(&"=".repeat(50));
    output.push('\n');
    output.push_str(&format!("Total Spent:    {}\n", summary.total));
    output.push_str(&format!("Daily Average:  {}\n", summary.average_daily));
    output.push_str(&format!("Transactions:   {}\n", summary.transaction_count));

    match &summary.top_category {
        Some((id, amount)) => {
            output.push_str(&format!(
                "Top Category:   {} ({})\n",
                store.category_name(id),
                amount
            ));
        }
        None => output.push_str("Top Category:   -\n"),
    }

    output
}

fn bar(amount: Money, max: Money) -> String {
    if max.is_zero() || !amount.is_positive() {
        return String::new();
    }
    let width = (amount.cents() as f64 / max.cents() as f64 * BAR_WIDTH as f64).round() as usize;
    "#".repeat(width.max(1))
}

/// Format the daily series, one line per day in chronological order
pub fn format_daily_series(series: &[DayBucket]) -> String {
    if series.is_empty() {
        return "No data.".to_string();
    }

    let max = series
        .iter()
        .map(|b| b.amount)
        .max()
        .unwrap_or_else(Money::zero);

    let mut output = String::new();
    for bucket in series {
        output.push_str(&format!(
            "{}  {:>10}  {}\n",
            bucket.date.format("%Y-%m-%d"),
            bucket.amount.to_string(),
            bar(bucket.amount, max)
        ));
    }
    output
}

/// Format the monthly series, one line per month in chronological order
pub fn format_monthly_series(series: &[MonthBucket]) -> String {
    if series.is_empty() {
        return "No data.".to_string();
    }

    let max = series
        .iter()
        .map(|b| b.amount)
        .max()
        .unwrap_or_else(Money::zero);

    let mut output = String::new();
    for bucket in series {
        output.push_str(&format!(
            "{:<9} {:>10}  {}\n",
            bucket.label(),
            bucket.amount.to_string(),
            bar(bucket.amount, max)
        ));
    }
    output
}
