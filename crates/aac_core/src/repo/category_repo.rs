//! Category registry: built-in folders plus user-created ones.
//!
//! # Invariants
//! - Built-ins come first and never change after construction.
//! - Custom categories are append-only for the session.
//! - No two categories share a key.

use crate::model::category::{builtin_categories, derive_category_key, Category};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Category creation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    /// Name is blank after trim.
    EmptyName,
    /// Derived key collides with an existing category.
    KeyTaken(String),
}

impl Display for CategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "category name must not be blank"),
            Self::KeyTaken(key) => write!(f, "category key already exists: {key}"),
        }
    }
}

impl Error for CategoryError {}

#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    builtins: Vec<Category>,
    custom: Vec<Category>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryRegistry {
    /// Registry holding the built-in folders only.
    pub fn new() -> Self {
        Self {
            builtins: builtin_categories(),
            custom: Vec::new(),
        }
    }

    /// Built-ins followed by custom categories, in creation order.
    pub fn all(&self) -> Vec<Category> {
        self.builtins.iter().chain(&self.custom).cloned().collect()
    }

    pub fn builtins(&self) -> &[Category] {
        &self.builtins
    }

    pub fn custom(&self) -> &[Category] {
        &self.custom
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.builtins
            .iter()
            .chain(&self.custom)
            .find(|category| category.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Appends a user-created category.
    pub fn create(
        &mut self,
        name: &str,
        color: &str,
        icon: &str,
    ) -> Result<Category, CategoryError> {
        let label = name.trim();
        if label.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        let key = derive_category_key(label);
        if self.contains(&key) {
            return Err(CategoryError::KeyTaken(key));
        }
        let category = Category {
            key,
            label: label.to_string(),
            icon: icon.trim().to_string(),
            color: color.trim().to_string(),
            builtin: false,
        };
        self.custom.push(category.clone());
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryError, CategoryRegistry};

    #[test]
    fn creates_custom_category_after_builtins() {
        let mut registry = CategoryRegistry::new();
        let builtin_count = registry.builtins().len();
        let created = registry
            .create("My New Topic", "#A3E6A3", "folder")
            .expect("create should succeed");
        assert_eq!(created.key, "my_new_topic");
        assert_eq!(created.label, "My New Topic");
        assert!(!created.builtin);

        let all = registry.all();
        assert_eq!(all.len(), builtin_count + 1);
        assert_eq!(all.last(), Some(&created));
    }

    #[test]
    fn rejects_blank_name_and_colliding_key() {
        let mut registry = CategoryRegistry::new();
        assert_eq!(
            registry.create("   ", "#A3E6A3", "folder"),
            Err(CategoryError::EmptyName)
        );
        assert_eq!(
            registry.create("Food", "#A3E6A3", "folder"),
            Err(CategoryError::KeyTaken("food".to_string()))
        );
        registry
            .create("Field Trip", "#A3E6A3", "bus")
            .expect("first create");
        assert_eq!(
            registry.create("field   trip", "#FFFFFF", "bus"),
            Err(CategoryError::KeyTaken("field_trip".to_string()))
        );
        assert_eq!(registry.custom().len(), 1);
    }
}
