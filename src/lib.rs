//! outlay - personal expense tracking from the terminal
//!
//! An in-memory expense ledger with category and budget management,
//! filtering, spending analytics, and CSV export. The store is the single
//! source of truth; analytics are pure functions over its snapshots, and
//! the display layer renders both for the terminal.

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod store;

pub use error::{OutlayError, OutlayResult};
pub use store::LedgerStore;
