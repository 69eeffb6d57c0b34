//! Budget CLI commands

use chrono::{Datelike, Local};
use clap::Subcommand;

use crate::analytics::{category_totals, evaluate_budgets, DateRange, ExpenseFilter};
use crate::cli::{parse_amount, parse_date};
use crate::display::{format_budget_list, format_budget_status};
use crate::error::OutlayResult;
use crate::models::{month_bounds, BudgetId, BudgetPeriod, BudgetUpdate, CategoryId};
use crate::store::LedgerStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// List budget definitions with their ids
    List,

    /// Create a budget for a category (defaults to the current month)
    Set {
        /// Category id (e.g. "food")
        category: String,
        /// Limit amount (e.g. "400")
        amount: String,
        /// Budget period (weekly, monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        period: BudgetPeriod,
        /// Period start (YYYY-MM-DD, default first day of this month)
        #[arg(long)]
        from: Option<String>,
        /// Period end (YYYY-MM-DD, default last day of this month)
        #[arg(long)]
        to: Option<String>,
    },

    /// Change a budget's limit
    Edit {
        /// Budget id
        id: String,
        /// New limit amount
        amount: String,
    },

    /// Delete a budget
    Delete {
        /// Budget id
        id: String,
    },

    /// Show this month's spending against each budget
    Status,
}

/// Handle budget commands
pub fn handle_budget_command(store: &mut LedgerStore, cmd: BudgetCommands) -> OutlayResult<()> {
    match cmd {
        BudgetCommands::List => {
            println!("{}", format_budget_list(store.budgets(), store));
        }

        BudgetCommands::Set {
            category,
            amount,
            period,
            from,
            to,
        } => {
            let today = Local::now().date_naive();
            let (month_start, month_end) = month_bounds(today.year(), today.month());
            let start = match from {
                Some(s) => parse_date(&s)?,
                None => month_start,
            };
            let end = match to {
                Some(s) => parse_date(&s)?,
                None => month_end,
            };

            let budget = store.add_budget(
                CategoryId::from_raw(category),
                parse_amount(&amount)?,
                period,
                start,
                end,
            )?;
            println!(
                "Set {} budget of {} for '{}' ({})",
                budget.period,
                budget.amount,
                store.category_name(&budget.category_id),
                budget.id
            );
        }

        BudgetCommands::Edit { id, amount } => {
            let update = BudgetUpdate {
                amount: Some(parse_amount(&amount)?),
                ..Default::default()
            };

            match store.update_budget(&BudgetId::from_raw(id), update)? {
                Some(budget) => println!("Updated budget to {}", budget.amount),
                None => println!("No budget with that id; nothing changed."),
            }
        }

        BudgetCommands::Delete { id } => {
            if store.delete_budget(&BudgetId::from_raw(id)) {
                println!("Deleted budget.");
            } else {
                println!("No budget with that id; nothing changed.");
            }
        }

        BudgetCommands::Status => {
            let evaluated = evaluate_current_month(store);
            println!("{}", format_budget_status(&evaluated, store));
        }
    }

    Ok(())
}

/// Evaluate every budget against this calendar month's spending
fn evaluate_current_month(store: &LedgerStore) -> Vec<crate::analytics::EvaluatedBudget> {
    let today = Local::now().date_naive();
    let (start, end) = month_bounds(today.year(), today.month());

    let filter = ExpenseFilter::new().with_range(DateRange::new(start, end));
    let in_month = filter.apply(store.expenses());
    let spend = category_totals(in_month.iter().copied());

    evaluate_budgets(store.budgets(), &spend)
}
