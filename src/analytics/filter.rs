//! Expense filtering
//!
//! Narrows the working expense set by a search term, a category selector,
//! and an optional inclusive date range. The three predicates combine with
//! AND semantics; each defaults to match-everything.

use chrono::NaiveDate;

use crate::models::{CategoryId, Expense};

/// An inclusive date range; the range filter only applies when both bounds
/// are known, so the type requires both
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Check if a date falls within this range (inclusive on both ends)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Category selector: everything, or one specific category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(CategoryId),
}

/// Conjunction of the three filter predicates
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive substring match against description and the raw
    /// category identifier; empty matches everything
    pub search: String,

    /// Category to restrict to
    pub category: CategorySelector,

    /// Inclusive date range; `None` matches everything
    pub range: Option<DateRange>,
}

impl ExpenseFilter {
    /// A filter that matches every expense
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = CategorySelector::Only(category);
        self
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Check whether a single expense satisfies all three predicates
    pub fn matches(&self, expense: &Expense) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            expense.description.to_lowercase().contains(&needle)
                || expense.category.as_str().to_lowercase().contains(&needle)
        };

        let matches_category = match &self.category {
            CategorySelector::All => true,
            CategorySelector::Only(id) => &expense.category == id,
        };

        let matches_range = match &self.range {
            None => true,
            Some(range) => range.contains(expense.date),
        };

        matches_search && matches_category && matches_range
    }

    /// Produce the filtered subset, preserving input order
    pub fn apply<'a>(&self, expenses: &'a [Expense]) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| self.matches(e)).collect()
    }
}
