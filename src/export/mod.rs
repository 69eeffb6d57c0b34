//! Export module
//!
//! CSV export of a (filtered) expense collection, spreadsheet-compatible.

pub mod csv;

pub use csv::{export_expenses_csv, export_filename};
