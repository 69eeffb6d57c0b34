//! Terminal display formatting
//!
//! Renders store contents and analytics output for the CLI: tabled-based
//! tables for lists and plain string formatting for reports.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::{format_budget_list, format_budget_status};
pub use expense::{format_category_list, format_expense_table};
pub use report::{format_daily_series, format_monthly_series, format_summary};
