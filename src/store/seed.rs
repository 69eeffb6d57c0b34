//! Deterministic demo dataset
//!
//! Seeds a store with sample expenses and budgets relative to a reference
//! date, so every CLI invocation has data to show without a persistence
//! layer. The offsets and amounts are fixed; given the same reference date
//! the dataset is identical.

use chrono::{Duration, NaiveDate};

use crate::models::{Budget, BudgetId, CategoryId, ExpenseDraft, Money, UserId};
use crate::store::LedgerStore;

/// Sample expenses: (days before `today`, amount cents, category slug,
/// description, payment method)
const SAMPLE_EXPENSES: &[(i64, i64, &str, &str, &str)] = &[
    (0, 450, "food", "Coffee and croissant", "cash"),
    (1, 6823, "food", "Weekly groceries", "debit"),
    (1, 1550, "transport", "Fuel top-up", "credit"),
    (2, 1299, "entertainment", "Movie ticket", "credit"),
    (3, 2750, "food", "Dinner with friends", "credit"),
    (4, 899, "shopping", "Phone case", "digital"),
    (5, 4200, "utilities", "Electricity bill", "bank"),
    (7, 650, "transport", "Bus pass refill", "cash"),
    (9, 3475, "healthcare", "Pharmacy", "debit"),
    (12, 5999, "shopping", "Running shoes", "credit"),
    (14, 1825, "food", "Takeout", "digital"),
    (18, 2500, "education", "Online course", "credit"),
    (21, 1200, "entertainment", "Concert ticket deposit", "debit"),
    (25, 7450, "travel", "Train tickets", "credit"),
    (28, 999, "other", "Stationery", "cash"),
    (35, 5280, "food", "Groceries", "debit"),
    (40, 3600, "utilities", "Internet bill", "bank"),
    (47, 2199, "entertainment", "Streaming annual plan", "credit"),
    (55, 8900, "travel", "Hotel deposit", "credit"),
    (60, 1500, "other", "Gift wrap and cards", "cash"),
];

/// Sample budgets: (category slug, monthly limit in cents)
const SAMPLE_BUDGETS: &[(&str, i64)] = &[
    ("food", 40000),
    ("transport", 15000),
    ("entertainment", 10000),
    ("shopping", 20000),
];

/// Build a demo store with default categories, sample expenses over the
/// last two months, and current-month budgets
pub fn demo_store(user_id: UserId, today: NaiveDate) -> LedgerStore {
    let mut store = LedgerStore::with_defaults(user_id.clone());

    // Insert oldest first so the store's prepend order leaves the newest
    // expense at the front.
    for (days_ago, cents, category, description, payment) in SAMPLE_EXPENSES.iter().rev() {
        let draft = ExpenseDraft {
            amount: Money::from_cents(*cents),
            category: CategoryId::from_raw(*category),
            subcategory: None,
            description: description.to_string(),
            date: today - Duration::days(*days_ago),
            payment_method: payment.to_string(),
            tags: vec![],
        };
        store
            .add_expense(draft)
            .expect("seed expenses are valid by construction");
    }

    // Budget ids are stable slugs so 'budget edit'/'budget delete' can
    // target seeded budgets across invocations.
    for (category, cents) in SAMPLE_BUDGETS {
        let mut budget = Budget::for_current_month(
            user_id.clone(),
            CategoryId::from_raw(*category),
            Money::from_cents(*cents),
            today,
        );
        budget.id = BudgetId::from_raw(format!("{}-monthly", category));
        store
            .insert_budget(budget)
            .expect("seed budgets are valid by construction");
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_store_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let a = demo_store(UserId::from_raw("local"), today);
        let b = demo_store(UserId::from_raw("local"), today);

        assert_eq!(a.expenses().len(), SAMPLE_EXPENSES.len());
        assert_eq!(a.budgets().len(), SAMPLE_BUDGETS.len());

        let dates_a: Vec<_> = a.expenses().iter().map(|e| e.date).collect();
        let dates_b: Vec<_> = b.expenses().iter().map(|e| e.date).collect();
        assert_eq!(dates_a, dates_b);

        // Budget ids are stable across seedings
        let ids_a: Vec<_> = a.budgets().iter().map(|budget| budget.id.clone()).collect();
        let ids_b: Vec<_> = b.budgets().iter().map(|budget| budget.id.clone()).collect();
        assert_eq!(ids_a, ids_b);
        assert!(ids_a.contains(&BudgetId::from_raw("food-monthly")));
    }

    #[test]
    fn test_demo_store_newest_first() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let store = demo_store(UserId::from_raw("local"), today);

        let dates: Vec<_> = store.expenses().iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(dates[0], today);
    }

    #[test]
    fn test_demo_budgets_cover_current_month() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
        let store = demo_store(UserId::from_raw("local"), today);

        for budget in store.budgets() {
            assert!(budget.start_date <= today && today <= budget.end_date);
        }
    }
}
