//! Payment method catalog
//!
//! Expenses carry a payment-method identifier; this module holds the
//! built-in catalog used for display. Unknown identifiers are rendered
//! verbatim, consistent with the tolerance for dangling references.

use serde::{Deserialize, Serialize};

/// A payment method entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
}

impl PaymentMethod {
    /// The built-in payment method catalog
    pub fn defaults() -> Vec<Self> {
        [
            ("cash", "Cash"),
            ("credit", "Credit Card"),
            ("debit", "Debit Card"),
            ("bank", "Bank Transfer"),
            ("digital", "Digital Wallet"),
        ]
        .iter()
        .map(|(id, name)| Self {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
    }

    /// Resolve a payment-method id to its display name, falling back to
    /// the raw id for unknown methods
    pub fn display_name(id: &str) -> String {
        Self::defaults()
            .into_iter()
            .find(|m| m.id == id)
            .map(|m| m.name)
            .unwrap_or_else(|| id.to_string())
    }
}
