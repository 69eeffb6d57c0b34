//! Expense model
//!
//! An expense is a single recorded spending transaction: an amount, a
//! category reference, a description, and an occurrence date, plus a few
//! informational fields (payment method, tags, optional subcategory).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, UserId};
use super::money::Money;

/// Maximum description length in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A single recorded spending transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Owning user
    pub user_id: UserId,

    /// Monetary amount (always positive)
    pub amount: Money,

    /// Category reference; dangling references are tolerated and rendered
    /// as the raw identifier
    pub category: CategoryId,

    /// Optional free-text subcategory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    /// Free-text description (1-200 characters)
    pub description: String,

    /// Occurrence date (calendar date, no time component)
    pub date: NaiveDate,

    /// Payment method identifier (e.g. "cash", "credit")
    pub payment_method: String,

    /// Free-text tags; insertion order is not significant
    #[serde(default)]
    pub tags: Vec<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,

    /// When the expense was last modified
    pub updated_at: DateTime<Utc>,
}

/// The caller-supplied fields of a new expense; id and timestamps are
/// assigned by the store at creation time
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: CategoryId,
    pub subcategory: Option<String>,
    pub description: String,
    pub date: NaiveDate,
    pub payment_method: String,
    pub tags: Vec<String>,
}

/// A partial update to an expense; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub amount: Option<Money>,
    pub category: Option<CategoryId>,
    pub subcategory: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl Expense {
    /// Create a new expense from a draft, assigning a fresh id and timestamps
    pub fn from_draft(user_id: UserId, draft: ExpenseDraft) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            user_id,
            amount: draft.amount,
            category: draft.category,
            subcategory: draft.subcategory,
            description: draft.description,
            date: draft.date,
            payment_method: draft.payment_method,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into this expense and refresh `updated_at`
    pub fn apply(&mut self, update: ExpenseUpdate) {
        if let Some(amount) = update.amount {
            self.amount = amount;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(subcategory) = update.subcategory {
            self.subcategory = Some(subcategory);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(payment_method) = update.payment_method {
            self.payment_method = payment_method;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }

        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ExpenseValidationError::DescriptionTooLong(
                self.description.chars().count(),
            ));
        }

        if self.category.as_str().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        if self.payment_method.trim().is_empty() {
            return Err(ExpenseValidationError::MissingPaymentMethod);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.date, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    EmptyDescription,
    DescriptionTooLong(usize),
    MissingCategory,
    MissingPaymentMethod,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::EmptyDescription => write!(f, "Description is required"),
            Self::DescriptionTooLong(len) => {
                write!(
                    f,
                    "Description too long ({} chars, max {})",
                    len, MAX_DESCRIPTION_LEN
                )
            }
            Self::MissingCategory => write!(f, "Category is required"),
            Self::MissingPaymentMethod => write!(f, "Payment method is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
