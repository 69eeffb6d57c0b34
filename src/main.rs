//! outlay - personal expense tracking from the terminal

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};

use outlay::cli::{
    handle_budget_command, handle_category_command, handle_expense_command, handle_export_command,
    handle_report_command, BudgetCommands, CategoryCommands, ExpenseCommands, ExportArgs,
    ReportCommands,
};
use outlay::config::Settings;
use outlay::store::seed::demo_store;

#[derive(Parser)]
#[command(name = "outlay")]
#[command(author, version, about = "Personal expense tracking from the terminal")]
struct Cli {
    /// Path to a JSON settings file
    #[arg(long, env = "OUTLAY_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and manage expenses
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Manage budgets and check their status
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export expenses as CSV
    Export(ExportArgs),

    /// Show the active settings
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_or_default(cli.config.as_deref())?;

    // No persistence layer; every invocation starts from the demo dataset.
    let today = Local::now().date_naive();
    let mut store = demo_store(settings.user_id.clone(), today);

    match cli.command {
        Commands::Expense(cmd) => handle_expense_command(&mut store, cmd)?,
        Commands::Category(cmd) => handle_category_command(&mut store, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut store, cmd)?,
        Commands::Report(cmd) => handle_report_command(&store, cmd)?,
        Commands::Export(args) => handle_export_command(&store, args)?,
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
