//! Spending aggregation
//!
//! Pure reductions over an expense collection: totals, per-category sums,
//! and the top category. No hidden state; identical inputs give identical
//! outputs.

use std::collections::HashMap;

use crate::models::{CategoryId, Expense, Money};

/// Sum of all expense amounts
pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Money {
    expenses.into_iter().map(|e| e.amount).sum()
}

/// Per-category sums, built in a single pass
pub fn category_totals<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> HashMap<CategoryId, Money> {
    let mut totals: HashMap<CategoryId, Money> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }
    totals
}

/// The category with the maximum total, with its total
///
/// Ties break toward the category first encountered in input order, which
/// keeps the result deterministic for a given ordering (a hash map alone
/// would not).
pub fn top_category<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
) -> Option<(CategoryId, Money)> {
    let mut totals: HashMap<CategoryId, Money> = HashMap::new();
    let mut order: Vec<CategoryId> = Vec::new();

    for expense in expenses {
        if !totals.contains_key(&expense.category) {
            order.push(expense.category.clone());
        }
        *totals.entry(expense.category.clone()).or_default() += expense.amount;
    }

    let mut best: Option<(CategoryId, Money)> = None;
    for id in order {
        let amount = totals[&id];
        match &best {
            Some((_, current)) if amount <= *current => {}
            _ => best = Some((id, amount)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, UserId};
    use chrono::NaiveDate;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::from_draft(
            UserId::from_raw("local"),
            ExpenseDraft {
                amount: Money::from_cents(cents),
                category: CategoryId::from_raw(category),
                subcategory: None,
                description: "test".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                payment_method: "cash".to_string(),
                tags: vec![],
            },
        )
    }

    #[test]
    fn test_total() {
        let expenses = vec![expense(100, "food"), expense(250, "transport")];
        assert_eq!(total(&expenses).cents(), 350);
    }

    #[test]
    fn test_total_of_empty_collection_is_zero() {
        assert_eq!(total(&[]).cents(), 0);
    }

    #[test]
    fn test_category_totals_partition_sums_to_whole() {
        let expenses = vec![
            expense(100, "food"),
            expense(250, "transport"),
            expense(75, "food"),
            expense(1200, "travel"),
        ];

        let totals = category_totals(&expenses);
        let partition_sum: Money = totals.values().copied().sum();
        assert_eq!(partition_sum, total(&expenses));

        assert_eq!(totals[&CategoryId::from_raw("food")].cents(), 175);
        assert_eq!(totals[&CategoryId::from_raw("transport")].cents(), 250);
    }

    #[test]
    fn test_top_category() {
        let expenses = vec![
            expense(100, "food"),
            expense(250, "transport"),
            expense(200, "food"),
        ];

        let (id, amount) = top_category(&expenses).unwrap();
        assert_eq!(id, CategoryId::from_raw("food"));
        assert_eq!(amount.cents(), 300);
    }

    #[test]
    fn test_top_category_tie_breaks_first_encountered() {
        let expenses = vec![expense(100, "food"), expense(100, "transport")];
        let (id, _) = top_category(&expenses).unwrap();
        assert_eq!(id, CategoryId::from_raw("food"));

        let reversed = vec![expense(100, "transport"), expense(100, "food")];
        let (id, _) = top_category(&reversed).unwrap();
        assert_eq!(id, CategoryId::from_raw("transport"));
    }

    #[test]
    fn test_top_category_of_empty_collection() {
        assert!(top_category(&[]).is_none());
    }
}
