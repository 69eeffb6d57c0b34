//! Budget status formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::analytics::EvaluatedBudget;
use crate::models::Budget;
use crate::store::LedgerStore;

#[derive(Tabled)]
struct BudgetDefinitionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
}

/// Format budget definitions as a table, ids included so they can be fed
/// to 'budget edit' and 'budget delete'
pub fn format_budget_list(budgets: &[Budget], store: &LedgerStore) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n\nUse 'outlay budget set' to create one.".to_string();
    }

    let rows: Vec<BudgetDefinitionRow> = budgets
        .iter()
        .map(|b| BudgetDefinitionRow {
            id: b.id.to_string(),
            category: store.category_name(&b.category_id),
            limit: b.amount.to_string(),
            period: b.period.to_string(),
            start: b.start_date.format("%Y-%m-%d").to_string(),
            end: b.end_date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Format evaluated budgets as a table, resolving category names through
/// the store (dangling references render as the raw id)
pub fn format_budget_status(evaluated: &[EvaluatedBudget], store: &LedgerStore) -> String {
    if evaluated.is_empty() {
        return "No budgets set.\n\nUse 'outlay budget set' to create one.".to_string();
    }

    let rows: Vec<BudgetRow> = evaluated
        .iter()
        .map(|e| BudgetRow {
            category: store.category_name(&e.category_id),
            spent: e.spent.to_string(),
            limit: e.limit.to_string(),
            used: format!("{:.1}%", e.percentage),
            status: e.status.label().to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::evaluate_budgets;
    use crate::models::{BudgetPeriod, CategoryId, Money, UserId};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    #[test]
    fn test_empty_budget_status() {
        let store = LedgerStore::with_defaults(UserId::from_raw("local"));
        let output = format_budget_status(&[], &store);
        assert!(output.contains("No budgets set"));
    }

    #[test]
    fn test_budget_list_shows_ids() {
        let mut store = LedgerStore::with_defaults(UserId::from_raw("local"));
        let mut budget = crate::models::Budget::new(
            UserId::from_raw("local"),
            CategoryId::from_raw("food"),
            Money::from_cents(40000),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        budget.id = crate::models::BudgetId::from_raw("food-monthly");
        store.insert_budget(budget).unwrap();

        let output = format_budget_list(store.budgets(), &store);
        assert!(output.contains("food-monthly"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("monthly"));
        assert!(output.contains("2024-01-01"));
    }

    #[test]
    fn test_budget_status_table() {
        let mut store = LedgerStore::with_defaults(UserId::from_raw("local"));
        store
            .add_budget(
                CategoryId::from_raw("food"),
                Money::from_cents(10000),
                BudgetPeriod::Monthly,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            )
            .unwrap();

        let mut spend = HashMap::new();
        spend.insert(CategoryId::from_raw("food"), Money::from_cents(8500));

        let evaluated = evaluate_budgets(store.budgets(), &spend);
        let output = format_budget_status(&evaluated, &store);

        assert!(output.contains("Food & Dining"));
        assert!(output.contains("$85.00"));
        assert!(output.contains("85.0%"));
        assert!(output.contains("Near Limit"));
    }
}
