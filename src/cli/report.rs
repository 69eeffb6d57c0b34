//! Report CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::analytics::{daily_series, monthly_series, SpendingSummary};
use crate::display::{format_daily_series, format_monthly_series, format_summary};
use crate::error::OutlayResult;
use crate::store::LedgerStore;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Headline figures for a trailing window of days
    Summary {
        /// Window length in days (ending today)
        #[arg(short, long, default_value_t = 30)]
        days: u32,
    },

    /// Day-by-day spending for a trailing window
    Daily {
        /// Window length in days (ending today)
        #[arg(short, long, default_value_t = 7)]
        days: u32,
    },

    /// Month-by-month spending for a trailing window
    Monthly {
        /// Window length in months (ending with the current month)
        #[arg(short, long, default_value_t = 6)]
        months: u32,
    },
}

/// Handle report commands
pub fn handle_report_command(store: &LedgerStore, cmd: ReportCommands) -> OutlayResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Summary { days } => {
            let summary = SpendingSummary::for_trailing_days(store.expenses(), today, days);
            println!("{}", format_summary(&summary, store));
        }

        ReportCommands::Daily { days } => {
            let series = daily_series(store.expenses(), today, days);
            println!("{}", format_daily_series(&series));
        }

        ReportCommands::Monthly { months } => {
            let series = monthly_series(store.expenses(), today, months);
            println!("{}", format_monthly_series(&series));
        }
    }

    Ok(())
}
