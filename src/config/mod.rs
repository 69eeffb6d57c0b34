//! Configuration for outlay
//!
//! Session settings: currency symbol, the session user, and date format.

pub mod settings;

pub use settings::Settings;
