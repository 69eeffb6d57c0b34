//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the store and analytics layers.

pub mod budget;
pub mod category;
pub mod expense;
pub mod export;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportArgs};
pub use report::{handle_report_command, ReportCommands};

use chrono::NaiveDate;

use crate::error::{OutlayError, OutlayResult};
use crate::models::Money;

/// Parse a `YYYY-MM-DD` date argument
pub(crate) fn parse_date(s: &str) -> OutlayResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| OutlayError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s)))
}

/// Parse a money argument like "4.50" or "$4.50"
pub(crate) fn parse_amount(s: &str) -> OutlayResult<Money> {
    Money::parse(s).map_err(|e| OutlayError::Validation(e.to_string()))
}
