//! Core data models for outlay
//!
//! Expenses, categories, budgets, the payment-method catalog, money, and
//! the strongly-typed ids tying them together.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod payment;

pub use budget::{month_bounds, Budget, BudgetPeriod, BudgetUpdate};
pub use category::{Category, CategoryUpdate};
pub use expense::{Expense, ExpenseDraft, ExpenseUpdate};
pub use ids::{BudgetId, CategoryId, ExpenseId, UserId};
pub use money::Money;
pub use payment::PaymentMethod;
