//! Category (folder) model and collection addressing.
//!
//! # Responsibility
//! - Define built-in and user-created category records.
//! - Derive stable category keys from user-entered names.
//!
//! # Invariants
//! - Built-in categories are fixed at startup and never mutated.
//! - `home` always addresses the unpartitioned home collection.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Reserved key of the home collection.
pub const HOME_KEY: &str = "home";

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Addresses one tile collection in the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKey {
    /// Unpartitioned landing collection.
    Home,
    /// Collection owned by one category key.
    Category(String),
}

impl CollectionKey {
    /// Parses a folder key; `home` maps to [`CollectionKey::Home`].
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed == HOME_KEY {
            Self::Home
        } else {
            Self::Category(trimmed.to_string())
        }
    }

    pub fn category(key: impl Into<String>) -> Self {
        Self::Category(key.into())
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Folder key string, `home` for the home collection.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => HOME_KEY,
            Self::Category(key) => key.as_str(),
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named, colored grouping of tiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique folder key.
    pub key: String,
    /// User-facing name.
    pub label: String,
    /// Icon identifier, opaque to core.
    pub icon: String,
    /// Folder tab color.
    pub color: String,
    /// Whether this folder ships with the app.
    pub builtin: bool,
}

impl Category {
    fn builtin(key: &str, label: &str, icon: &str, color: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            builtin: true,
        }
    }

    /// Collection address of this category's tiles.
    pub fn collection(&self) -> CollectionKey {
        CollectionKey::parse(&self.key)
    }
}

/// Derives a folder key: trim, lowercase, whitespace runs become `_`.
///
/// `"My New Topic"` becomes `"my_new_topic"`.
pub fn derive_category_key(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    WHITESPACE_RUN_RE.replace_all(&lowered, "_").into_owned()
}

/// Returns the built-in folder list in display order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::builtin(HOME_KEY, "Home", "home", "#4CAF50"),
        Category::builtin("people", "People", "people", "#FFB366"),
        Category::builtin("things", "Things", "cube", "#FFD699"),
        Category::builtin("food", "Food", "restaurant", "#FF9966"),
        Category::builtin("places", "Places", "location", "#A3E6A3"),
        Category::builtin("actions", "Actions", "walk", "#E6B3FF"),
        Category::builtin("math", "Math", "calculator", "#FFE6B3"),
        Category::builtin("science", "Science", "flask", "#A3E6C6"),
        Category::builtin("english", "English", "book", "#99CCFF"),
        Category::builtin("questions", "Questions?", "help-circle", "#FFB3E6"),
        Category::builtin("help", "Help", "medkit", "#FFB3B3"),
    ]
}
