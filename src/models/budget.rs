//! Budget model
//!
//! A budget is a spending cap for one category over a period. The current
//! design evaluates every budget against current-month spend; the period
//! enum and date bounds are carried for display and future evaluation.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{BudgetId, CategoryId, UserId};
use super::money::Money;

/// Budget period kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
            Self::Yearly => write!(f, "yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(format!(
                "Unknown period '{}' (expected weekly, monthly, or yearly)",
                other
            )),
        }
    }
}

/// A spending cap for one category over a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Owning user
    pub user_id: UserId,

    /// Target category
    pub category_id: CategoryId,

    /// Monetary limit (always positive)
    pub amount: Money,

    /// Period kind
    pub period: BudgetPeriod,

    /// Effective start date
    pub start_date: NaiveDate,

    /// Effective end date (inclusive, >= start_date)
    pub end_date: NaiveDate,
}

/// A partial update to a budget; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct BudgetUpdate {
    pub category_id: Option<CategoryId>,
    pub amount: Option<Money>,
    pub period: Option<BudgetPeriod>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Budget {
    /// Create a new budget with a fresh id
    pub fn new(
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            user_id,
            category_id,
            amount,
            period,
            start_date,
            end_date,
        }
    }

    /// Create a monthly budget covering the calendar month containing `today`
    pub fn for_current_month(
        user_id: UserId,
        category_id: CategoryId,
        amount: Money,
        today: NaiveDate,
    ) -> Self {
        let (start, end) = month_bounds(today.year(), today.month());
        Self::new(user_id, category_id, amount, BudgetPeriod::Monthly, start, end)
    }

    /// Merge a partial update into this budget
    pub fn apply(&mut self, update: BudgetUpdate) {
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(period) = update.period {
            self.period = period;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount);
        }

        if self.category_id.as_str().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }

        if self.end_date < self.start_date {
            return Err(BudgetValidationError::EndBeforeStart);
        }

        Ok(())
    }
}

/// First and last day of the given calendar month
pub fn month_bounds(year: i32, month: u32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).expect("valid year start"));

    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let end = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(start);

    (start, end)
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount,
    MissingCategory,
    EndBeforeStart,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::MissingCategory => write!(f, "Category is required"),
            Self::EndBeforeStart => write!(f, "End date must not precede start date"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
