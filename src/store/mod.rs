//! In-memory record store
//!
//! `LedgerStore` is the single source of truth for expenses, categories,
//! and budgets. All data lives in memory for the lifetime of the process;
//! there is no persistence layer.
//!
//! Mutation goes through `&mut self`, so Rust's ownership rules enforce the
//! single-writer discipline: wrap the store in a `Mutex` or `RwLock` if it
//! ever needs to be shared across threads. Every mutation validates first
//! and leaves the store unchanged on error. Updating or deleting an absent
//! id is a silent no-op, not an error.

pub mod seed;

use crate::error::{OutlayError, OutlayResult};
use crate::models::{
    Budget, BudgetId, BudgetPeriod, BudgetUpdate, Category, CategoryId, CategoryUpdate, Expense,
    ExpenseDraft, ExpenseId, ExpenseUpdate, Money, UserId,
};
use chrono::NaiveDate;

/// Single source of truth for expenses, categories, and budgets
#[derive(Debug, Clone)]
pub struct LedgerStore {
    user_id: UserId,
    expenses: Vec<Expense>,
    categories: Vec<Category>,
    budgets: Vec<Budget>,
}

impl LedgerStore {
    /// Create an empty store for the given session user
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            expenses: Vec::new(),
            categories: Vec::new(),
            budgets: Vec::new(),
        }
    }

    /// Create a store pre-populated with the default category catalog
    pub fn with_defaults(user_id: UserId) -> Self {
        let categories = Category::defaults(&user_id);
        Self {
            user_id,
            expenses: Vec::new(),
            categories,
            budgets: Vec::new(),
        }
    }

    /// The session user this store belongs to
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    // === Expense operations ===

    /// Add a new expense; assigns id and timestamps, prepends to the
    /// collection so the newest entry lists first
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> OutlayResult<Expense> {
        let expense = Expense::from_draft(self.user_id.clone(), draft);
        expense
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Merge a partial update into the matching expense, refreshing its
    /// update timestamp; returns `Ok(None)` if the id is absent
    pub fn update_expense(
        &mut self,
        id: &ExpenseId,
        update: ExpenseUpdate,
    ) -> OutlayResult<Option<Expense>> {
        let Some(expense) = self.expenses.iter_mut().find(|e| &e.id == id) else {
            return Ok(None);
        };

        let mut candidate = expense.clone();
        candidate.apply(update);
        candidate
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        *expense = candidate.clone();
        Ok(Some(candidate))
    }

    /// Remove the matching expense; returns whether a record was removed
    pub fn delete_expense(&mut self, id: &ExpenseId) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| &e.id != id);
        self.expenses.len() != before
    }

    /// All expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Look up an expense by id
    pub fn expense(&self, id: &ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| &e.id == id)
    }

    // === Category operations ===

    /// Add a new user-defined category
    pub fn add_category(
        &mut self,
        name: &str,
        icon: &str,
        color: &str,
    ) -> OutlayResult<Category> {
        let category = Category::new(self.user_id.clone(), name, icon, color);
        category
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        self.categories.push(category.clone());
        Ok(category)
    }

    /// Merge a partial update into the matching category; returns
    /// `Ok(None)` if the id is absent
    pub fn update_category(
        &mut self,
        id: &CategoryId,
        update: CategoryUpdate,
    ) -> OutlayResult<Option<Category>> {
        let Some(category) = self.categories.iter_mut().find(|c| &c.id == id) else {
            return Ok(None);
        };

        let mut candidate = category.clone();
        candidate.apply(update);
        candidate
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        *category = candidate.clone();
        Ok(Some(candidate))
    }

    /// Remove the matching category
    ///
    /// Default categories are protected: the operation fails with
    /// `Protected` and the collection is unchanged. Expenses referencing
    /// the removed category keep their dangling reference; it renders as
    /// the raw identifier.
    pub fn delete_category(&mut self, id: &CategoryId) -> OutlayResult<bool> {
        if let Some(category) = self.categories.iter().find(|c| &c.id == id) {
            if category.is_default {
                return Err(OutlayError::protected_category(id.as_str()));
            }
        }

        let before = self.categories.len();
        self.categories.retain(|c| &c.id != id);
        Ok(self.categories.len() != before)
    }

    /// All categories
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Resolve a category id to its display name, falling back to the raw
    /// identifier for dangling references
    pub fn category_name(&self, id: &CategoryId) -> String {
        self.category(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.as_str().to_string())
    }

    // === Budget operations ===

    /// Add a new budget for a category
    pub fn add_budget(
        &mut self,
        category_id: CategoryId,
        amount: Money,
        period: BudgetPeriod,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> OutlayResult<Budget> {
        let budget = Budget::new(
            self.user_id.clone(),
            category_id,
            amount,
            period,
            start_date,
            end_date,
        );
        budget
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        self.budgets.push(budget.clone());
        Ok(budget)
    }

    /// Insert a fully-formed budget, keeping its id; used by seeding where
    /// ids must be stable across invocations
    pub fn insert_budget(&mut self, budget: Budget) -> OutlayResult<()> {
        budget
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        self.budgets.push(budget);
        Ok(())
    }

    /// Merge a partial update into the matching budget; returns `Ok(None)`
    /// if the id is absent
    pub fn update_budget(
        &mut self,
        id: &BudgetId,
        update: BudgetUpdate,
    ) -> OutlayResult<Option<Budget>> {
        let Some(budget) = self.budgets.iter_mut().find(|b| &b.id == id) else {
            return Ok(None);
        };

        let mut candidate = budget.clone();
        candidate.apply(update);
        candidate
            .validate()
            .map_err(|e| OutlayError::Validation(e.to_string()))?;

        *budget = candidate.clone();
        Ok(Some(candidate))
    }

    /// Remove the matching budget; returns whether a record was removed
    pub fn delete_budget(&mut self, id: &BudgetId) -> bool {
        let before = self.budgets.len();
        self.budgets.retain(|b| &b.id != id);
        self.budgets.len() != before
    }

    /// All budgets
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }
}
