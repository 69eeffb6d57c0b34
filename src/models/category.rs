//! Category model
//!
//! Categories are grouping labels for expenses. A fixed set of default
//! categories seeds every store; defaults cannot be deleted. The optional
//! parent reference exists for a future hierarchy and is ignored by the
//! current aggregation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};

/// Maximum category name length in characters
pub const MAX_NAME_LEN: usize = 50;

/// A grouping label for expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier; defaults use well-known slugs ("food", "transport")
    pub id: CategoryId,

    /// Owning user
    pub user_id: UserId,

    /// Display name (1-50 characters)
    pub name: String,

    /// Icon reference for the presentation layer
    pub icon: String,

    /// Display color (hex string)
    pub color: String,

    /// Optional parent category (future hierarchy; unused by aggregation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CategoryId>,

    /// Default categories cannot be deleted
    #[serde(default)]
    pub is_default: bool,
}

/// A partial update to a category; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub parent_id: Option<CategoryId>,
}

impl Category {
    /// Create a new user-defined category with a fresh id
    pub fn new(
        user_id: UserId,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            user_id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            parent_id: None,
            is_default: false,
        }
    }

    /// Create a default category with a well-known slug id
    fn default_with_slug(user_id: UserId, slug: &str, name: &str, icon: &str, color: &str) -> Self {
        Self {
            id: CategoryId::from_raw(slug),
            user_id,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            parent_id: None,
            is_default: true,
        }
    }

    /// The default category catalog every store is seeded with
    pub fn defaults(user_id: &UserId) -> Vec<Self> {
        let defaults = [
            ("food", "Food & Dining", "utensils", "#ef4444"),
            ("transport", "Transportation", "car", "#3b82f6"),
            ("shopping", "Shopping", "shopping-bag", "#8b5cf6"),
            ("entertainment", "Entertainment", "film", "#f59e0b"),
            ("utilities", "Bills & Utilities", "zap", "#22c55e"),
            ("healthcare", "Healthcare", "heart", "#ec4899"),
            ("education", "Education", "book-open", "#06b6d4"),
            ("travel", "Travel", "plane", "#84cc16"),
            ("other", "Other", "more-horizontal", "#6b7280"),
        ];

        defaults
            .iter()
            .map(|(slug, name, icon, color)| {
                Self::default_with_slug(user_id.clone(), slug, name, icon, color)
            })
            .collect()
    }

    /// Merge a partial update into this category
    pub fn apply(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(parent_id) = update.parent_id {
            self.parent_id = Some(parent_id);
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(
                self.name.chars().count(),
            ));
        }

        if self.icon.trim().is_empty() {
            return Err(CategoryValidationError::MissingIcon);
        }

        if self.color.trim().is_empty() {
            return Err(CategoryValidationError::MissingColor);
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    MissingIcon,
    MissingColor,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name is required"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::MissingIcon => write!(f, "Icon is required"),
            Self::MissingColor => write!(f, "Color is required"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
