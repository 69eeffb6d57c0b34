//! Derived-analytics pipeline
//!
//! Pure, re-entrant computations over store snapshots: filtering,
//! aggregation, time series, budget evaluation, and period summaries.
//! Nothing here mutates the store; everything is recomputed from its
//! inputs and a caller-supplied reference date.

pub mod aggregate;
pub mod budget;
pub mod filter;
pub mod series;
pub mod summary;

pub use aggregate::{category_totals, top_category, total};
pub use budget::{evaluate_budgets, BudgetStatus, EvaluatedBudget};
pub use filter::{CategorySelector, DateRange, ExpenseFilter};
pub use series::{average_daily, daily_series, monthly_series, DayBucket, MonthBucket};
pub use summary::SpendingSummary;
