//! Content-word lexicon

use std::collections::HashMap;

use crate::tree::Category;
use crate::{GrammarError, Result};

/// Content words by category, in insertion order
///
/// Proper names keep the capitalisation they were first added with and are
/// looked up case-insensitively. Every other category is stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<Category, Vec<String>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `word` under `category`; returns false if it was already present
    pub fn add(&mut self, word: &str, category: Category) -> Result<bool> {
        if !category.is_content() {
            return Err(GrammarError::FunctionCategory(category));
        }
        if self.contains(word, category) {
            return Ok(false);
        }

        let stored = if category == Category::P {
            word.to_string()
        } else {
            word.to_lowercase()
        };
        tracing::trace!(word = %stored, %category, "lexicon entry");
        self.entries.entry(category).or_default().push(stored);
        Ok(true)
    }

    /// Is `word` listed under `category`?
    pub fn contains(&self, word: &str, category: Category) -> bool {
        if category == Category::P {
            return self.name(word).is_some();
        }
        let word = word.to_lowercase();
        self.all(category).iter().any(|w| *w == word)
    }

    /// Every entry under `category`, in insertion order
    pub fn all(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stored form of the proper name matching `word` case-insensitively
    pub fn name(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        self.all(Category::P)
            .iter()
            .find(|name| name.to_lowercase() == word)
            .map(String::as_str)
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
