//! Category registry for name lookup.
//!
//! The `CategoryRegistry` stores every category a host offers. The engine
//! looks categories up by name when a round starts.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::category::{self, Category};

/// Errors from building a registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("category `{0}` is already registered")]
    DuplicateCategory(String),

    #[error("category `{category}` lists item `{item}` more than once")]
    DuplicateItem { category: String, item: String },

    #[error("category names must not be empty")]
    EmptyName,
}

/// Registry of categories.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{Category, CategoryRegistry};
///
/// let mut registry = CategoryRegistry::builtin();
/// registry
///     .register(Category::new("Birds").with_item("Owl", "🦉"))
///     .unwrap();
///
/// assert_eq!(registry.names(), vec!["Animals", "Birds", "Fruits"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    categories: FxHashMap<String, Category>,
}

impl CategoryRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in Animals and Fruits categories.
    #[must_use]
    pub fn builtin() -> Self {
        let mut categories = FxHashMap::default();
        for cat in [category::animals(), category::fruits()] {
            categories.insert(cat.name.clone(), cat);
        }
        Self { categories }
    }

    /// Register a category.
    ///
    /// Rejects empty or already-registered names and categories that list an
    /// item twice.
    pub fn register(&mut self, category: Category) -> Result<(), CategoryError> {
        if category.name.trim().is_empty() {
            return Err(CategoryError::EmptyName);
        }
        if self.categories.contains_key(&category.name) {
            return Err(CategoryError::DuplicateCategory(category.name));
        }
        if let Some(item) = category.duplicate_item() {
            return Err(CategoryError::DuplicateItem {
                category: category.name.clone(),
                item: item.to_string(),
            });
        }

        self.categories.insert(category.name.clone(), category);
        Ok(())
    }

    /// Build a registry from a list of categories.
    pub fn from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, CategoryError> {
        let mut registry = Self::new();
        for category in categories {
            registry.register(category)?;
        }
        Ok(registry)
    }

    /// Get a category by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Check if a category is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    /// Registered category names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of registered categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate over all categories.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }
}
