//! Expense and category list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Expense, PaymentMethod};
use crate::store::LedgerStore;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Payment")]
    payment: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format expenses as a table, resolving category and payment-method names
pub fn format_expense_table(expenses: &[&Expense], store: &LedgerStore) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|e| ExpenseRow {
            date: e.date.format("%Y-%m-%d").to_string(),
            description: e.description.clone(),
            category: store.category_name(&e.category),
            amount: e.amount.to_string(),
            payment: PaymentMethod::display_name(&e.payment_method),
            id: e.id.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Default")]
    is_default: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            id: c.id.to_string(),
            color: c.color.clone(),
            is_default: if c.is_default { "yes" } else { "no" }.to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, ExpenseDraft, Money, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_expense_table() {
        let store = LedgerStore::with_defaults(UserId::from_raw("local"));
        let output = format_expense_table(&[], &store);
        assert!(output.contains("No expenses found"));
    }

    #[test]
    fn test_expense_table_resolves_names() {
        let mut store = LedgerStore::with_defaults(UserId::from_raw("local"));
        store
            .add_expense(ExpenseDraft {
                amount: Money::from_cents(450),
                category: CategoryId::from_raw("food"),
                subcategory: None,
                description: "Coffee".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                payment_method: "cash".to_string(),
                tags: vec![],
            })
            .unwrap();

        let expenses: Vec<&Expense> = store.expenses().iter().collect();
        let output = format_expense_table(&expenses, &store);

        assert!(output.contains("Coffee"));
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("Cash"));
        assert!(output.contains("$4.50"));
    }

    #[test]
    fn test_category_list() {
        let categories = Category::defaults(&UserId::from_raw("local"));
        let output = format_category_list(&categories);
        assert!(output.contains("Food & Dining"));
        assert!(output.contains("Travel"));
    }
}
