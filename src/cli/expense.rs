//! Expense CLI commands

use clap::Subcommand;
use chrono::{Local, NaiveDate};

use crate::analytics::{DateRange, ExpenseFilter};
use crate::cli::{parse_amount, parse_date};
use crate::error::OutlayResult;
use crate::display::format_expense_table;
use crate::models::{CategoryId, ExpenseDraft, ExpenseId, ExpenseUpdate};
use crate::store::LedgerStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g. "4.50")
        amount: String,
        /// Description (1-200 characters)
        description: String,
        /// Category id (e.g. "food"; see 'outlay category list')
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Occurrence date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method id (cash, credit, debit, bank, digital)
        #[arg(short, long, default_value = "cash")]
        payment: String,
        /// Optional subcategory
        #[arg(long)]
        subcategory: Option<String>,
        /// Tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// List expenses, optionally filtered
    List {
        /// Case-insensitive search over description and category id
        #[arg(short, long)]
        search: Option<String>,
        /// Restrict to one category id ("all" for everything)
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Range start (YYYY-MM-DD); only applies together with --to
        #[arg(long)]
        from: Option<String>,
        /// Range end (YYYY-MM-DD); only applies together with --from
        #[arg(long)]
        to: Option<String>,
    },

    /// Edit an expense
    Edit {
        /// Expense id
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category id
        #[arg(short, long)]
        category: Option<String>,
        /// New occurrence date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New payment method id
        #[arg(short, long)]
        payment: Option<String>,
        /// New subcategory
        #[arg(long)]
        subcategory: Option<String>,
        /// Replacement tags (repeatable); omit to keep the current tags
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense id
        id: String,
    },
}

/// Handle expense commands
pub fn handle_expense_command(store: &mut LedgerStore, cmd: ExpenseCommands) -> OutlayResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
            payment,
            subcategory,
            tag,
        } => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let expense = store.add_expense(ExpenseDraft {
                amount: parse_amount(&amount)?,
                category: CategoryId::from_raw(category),
                subcategory,
                description,
                date,
                payment_method: payment,
                tags: tag,
            })?;

            println!("Recorded expense {} ({})", expense.id, expense.amount);
        }

        ExpenseCommands::List {
            search,
            category,
            from,
            to,
        } => {
            let filter = build_filter(search, &category, from, to)?;
            let filtered = filter.apply(store.expenses());
            println!("{}", format_expense_table(&filtered, store));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
            payment,
            subcategory,
            tag,
        } => {
            let update = ExpenseUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category: category.map(CategoryId::from_raw),
                subcategory,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
                payment_method: payment,
                tags: if tag.is_empty() { None } else { Some(tag) },
            };

            match store.update_expense(&ExpenseId::from_raw(id), update)? {
                Some(expense) => println!("Updated expense {}", expense.id),
                None => println!("No expense with that id; nothing changed."),
            }
        }

        ExpenseCommands::Delete { id } => {
            if store.delete_expense(&ExpenseId::from_raw(id)) {
                println!("Deleted expense.");
            } else {
                println!("No expense with that id; nothing changed.");
            }
        }
    }

    Ok(())
}

/// Build a filter from the list command's arguments; the date range only
/// applies when both bounds are given
fn build_filter(
    search: Option<String>,
    category: &str,
    from: Option<String>,
    to: Option<String>,
) -> OutlayResult<ExpenseFilter> {
    let mut filter = ExpenseFilter::new();

    if let Some(search) = search {
        filter = filter.with_search(search);
    }

    if category != "all" {
        filter = filter.with_category(CategoryId::from_raw(category));
    }

    if let (Some(from), Some(to)) = (from, to) {
        filter = filter.with_range(DateRange::new(parse_date(&from)?, parse_date(&to)?));
    }

    Ok(filter)
}

/// Parse an optional pair of range bounds; exposed for the export command
pub(crate) fn parse_range(
    from: Option<String>,
    to: Option<String>,
    default_days: i64,
) -> OutlayResult<DateRange> {
    let today = Local::now().date_naive();
    let range = match (from, to) {
        (Some(from), Some(to)) => DateRange::new(parse_date(&from)?, parse_date(&to)?),
        (Some(from), None) => DateRange::new(parse_date(&from)?, today),
        (None, Some(to)) => {
            let to = parse_date(&to)?;
            DateRange::new(to - chrono::Duration::days(default_days - 1), to)
        }
        (None, None) => DateRange::new(today - chrono::Duration::days(default_days - 1), today),
    };
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::CategorySelector;
    use crate::models::{Money, UserId};

    #[test]
    fn test_build_filter_defaults() {
        let filter = build_filter(None, "all", None, None).unwrap();
        assert!(filter.search.is_empty());
        assert_eq!(filter.category, CategorySelector::All);
        assert!(filter.range.is_none());
    }

    #[test]
    fn test_build_filter_range_requires_both_bounds() {
        let filter = build_filter(None, "all", Some("2024-01-01".into()), None).unwrap();
        assert!(filter.range.is_none());

        let filter = build_filter(
            None,
            "all",
            Some("2024-01-01".into()),
            Some("2024-01-31".into()),
        )
        .unwrap();
        assert_eq!(
            filter.range,
            Some(DateRange::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
            ))
        );
    }

    #[test]
    fn test_build_filter_category() {
        let filter = build_filter(None, "food", None, None).unwrap();
        assert_eq!(
            filter.category,
            CategorySelector::Only(CategoryId::from_raw("food"))
        );
    }

    #[test]
    fn test_edit_updates_subcategory_and_tags() {
        let mut store = LedgerStore::with_defaults(UserId::from_raw("local"));
        let expense = store
            .add_expense(ExpenseDraft {
                amount: Money::from_cents(2750),
                category: CategoryId::from_raw("food"),
                subcategory: None,
                description: "Dinner".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                payment_method: "credit".to_string(),
                tags: vec!["friends".to_string()],
            })
            .unwrap();

        handle_expense_command(
            &mut store,
            ExpenseCommands::Edit {
                id: expense.id.to_string(),
                amount: None,
                description: None,
                category: None,
                date: None,
                payment: None,
                subcategory: Some("restaurant".to_string()),
                tag: vec!["birthday".to_string(), "group".to_string()],
            },
        )
        .unwrap();

        let updated = store.expense(&expense.id).unwrap();
        assert_eq!(updated.subcategory.as_deref(), Some("restaurant"));
        assert_eq!(updated.tags, vec!["birthday", "group"]);
        // Untouched fields survive
        assert_eq!(updated.description, "Dinner");
    }

    #[test]
    fn test_edit_without_tag_flags_keeps_tags() {
        let mut store = LedgerStore::with_defaults(UserId::from_raw("local"));
        let expense = store
            .add_expense(ExpenseDraft {
                amount: Money::from_cents(450),
                category: CategoryId::from_raw("food"),
                subcategory: None,
                description: "Coffee".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                payment_method: "cash".to_string(),
                tags: vec!["morning".to_string()],
            })
            .unwrap();

        handle_expense_command(
            &mut store,
            ExpenseCommands::Edit {
                id: expense.id.to_string(),
                amount: Some("5.00".to_string()),
                description: None,
                category: None,
                date: None,
                payment: None,
                subcategory: None,
                tag: vec![],
            },
        )
        .unwrap();

        let updated = store.expense(&expense.id).unwrap();
        assert_eq!(updated.amount.cents(), 500);
        assert_eq!(updated.tags, vec!["morning"]);
    }

    #[test]
    fn test_parse_range_explicit() {
        let range = parse_range(
            Some("2024-01-01".to_string()),
            Some("2024-01-31".to_string()),
            30,
        )
        .unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    }
}
