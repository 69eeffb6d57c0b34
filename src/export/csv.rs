//! CSV export functionality
//!
//! Writes expenses as `Date,Description,Category,Amount,Payment Method`
//! rows. The category column carries the display name, falling back to the
//! raw identifier for dangling references. The csv crate applies standard
//! quoting, so descriptions containing commas, quotes, or newlines survive
//! a round trip through a spreadsheet.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::io::Write;

use crate::error::OutlayResult;
use crate::models::{Category, CategoryId, Expense};

/// Export expenses to CSV, one row per expense, dates as `YYYY-MM-DD` and
/// amounts as minimal plain decimals
pub fn export_expenses_csv<'a, W: Write>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    categories: &[Category],
    writer: W,
) -> OutlayResult<()> {
    let names: HashMap<&CategoryId, &str> = categories
        .iter()
        .map(|c| (&c.id, c.name.as_str()))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Date", "Description", "Category", "Amount", "Payment Method"])?;

    for expense in expenses {
        let category = names
            .get(&expense.category)
            .copied()
            .unwrap_or_else(|| expense.category.as_str());

        wtr.write_record([
            expense.date.format("%Y-%m-%d").to_string().as_str(),
            expense.description.as_str(),
            category,
            expense.amount.to_plain_string().as_str(),
            expense.payment_method.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Suggested file name for an export covering `[from, to]`
pub fn export_filename(from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "expenses-{}-to-{}.csv",
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d")
    )
}
