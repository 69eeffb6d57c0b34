//! User settings for outlay
//!
//! The session user is a configuration value rather than a hardcoded
//! constant, so everything downstream stays single-tenant without baking
//! a literal user id into the code. Settings can optionally be loaded from
//! a JSON file; defaults apply otherwise.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::OutlayError;
use crate::models::UserId;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Session user all records are scoped to
    #[serde(default = "default_user_id")]
    pub user_id: UserId,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_user_id() -> UserId {
    UserId::from_raw("local")
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file if a path is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, OutlayError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(path)
            .map_err(|e| OutlayError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| OutlayError::Config(format!("Failed to parse settings file: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.user_id, UserId::from_raw("local"));
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_without_path() {
        let settings = Settings::load_or_default(None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"user_id": "alex", "currency_symbol": "€"}}"#).unwrap();

        let settings = Settings::load_or_default(Some(file.path())).unwrap();
        assert_eq!(settings.user_id, UserId::from_raw("alex"));
        assert_eq!(settings.currency_symbol, "€");
        // Missing fields fall back to defaults
        assert_eq!(settings.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = Settings::load_or_default(Some(file.path()));
        assert!(matches!(result, Err(OutlayError::Config(_))));
    }
}
