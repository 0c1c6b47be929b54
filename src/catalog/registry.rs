//! Category registry for word list lookup.
//!
//! The engine takes a `WordList` as a parameter; this registry is where the
//! caller keeps the named lists to choose from.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{EngineError, WordList};

/// Name of the built-in zodiac category.
pub const ZODIAC: &str = "zodiac";

const ZODIAC_WORDS: [&str; 12] = [
    "belier",
    "taureau",
    "gemeaux",
    "cancer",
    "lion",
    "vierge",
    "balance",
    "scorpion",
    "sagittaire",
    "capricorne",
    "verseau",
    "poissons",
];

/// Errors from category registration and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("category '{name}' is already registered")]
    DuplicateCategory { name: String },

    #[error("unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("invalid word list for category '{name}': {source}")]
    InvalidWords {
        name: String,
        #[source]
        source: EngineError,
    },
}

/// A named word list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub words: WordList,
}

impl Category {
    /// Create a category from raw words.
    pub fn new<I, S>(name: impl Into<String>, words: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.into();
        let words = WordList::new(words).map_err(|source| CatalogError::InvalidWords {
            name: name.clone(),
            source,
        })?;
        Ok(Self { name, words })
    }
}

/// Registry of categories, iterated in registration order.
///
/// ```
/// use peek_guess::catalog::{CategoryRegistry, ZODIAC};
///
/// let registry = CategoryRegistry::with_builtins();
/// assert_eq!(registry.get(ZODIAC).unwrap().len(), 12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    index: FxHashMap<String, usize>,
}

impl CategoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in categories.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.categories.push(zodiac());
        registry.index.insert(ZODIAC.to_string(), 0);
        registry
    }

    /// Register a category.
    pub fn register(&mut self, category: Category) -> Result<(), CatalogError> {
        if self.index.contains_key(&category.name) {
            return Err(CatalogError::DuplicateCategory { name: category.name });
        }
        self.index.insert(category.name.clone(), self.categories.len());
        self.categories.push(category);
        Ok(())
    }

    /// Get a category's word list by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WordList> {
        self.index.get(name).map(|&i| &self.categories[i].words)
    }

    /// Get a category's word list, failing if it is not registered.
    pub fn require(&self, name: &str) -> Result<&WordList, CatalogError> {
        self.get(name).ok_or_else(|| CatalogError::UnknownCategory { name: name.to_string() })
    }

    /// Check if a category is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Category names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Iterate over all categories.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn zodiac() -> Category {
    Category {
        name: ZODIAC.to_string(),
        words: WordList::new(ZODIAC_WORDS).expect("built-in zodiac list is valid"),
    }
}
