//! CSV export command

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::analytics::ExpenseFilter;
use crate::cli::expense::parse_range;
use crate::error::OutlayResult;
use crate::export::{export_expenses_csv, export_filename};
use crate::store::LedgerStore;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Range start (YYYY-MM-DD, default 30 days ago)
    #[arg(long)]
    pub from: Option<String>,

    /// Range end (YYYY-MM-DD, default today)
    #[arg(long)]
    pub to: Option<String>,

    /// Output file; "-" writes to stdout, omitted derives a name from the range
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(store: &LedgerStore, args: ExportArgs) -> OutlayResult<()> {
    let range = parse_range(args.from, args.to, 30)?;
    let filter = ExpenseFilter::new().with_range(range);
    let filtered = filter.apply(store.expenses());

    let path = match args.output {
        Some(path) if path.as_os_str() == "-" => {
            let stdout = io::stdout();
            export_expenses_csv(filtered.iter().copied(), store.categories(), stdout.lock())?;
            return Ok(());
        }
        Some(path) => path,
        None => PathBuf::from(export_filename(range.from, range.to)),
    };

    let file = File::create(&path)?;
    export_expenses_csv(filtered.iter().copied(), store.categories(), file)?;
    eprintln!(
        "Exported {} expenses to {}",
        filtered.len(),
        path.display()
    );

    Ok(())
}
