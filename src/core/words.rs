//! Immutable word lists supplied at game start.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::letter::Letter;

/// An ordered, non-empty, duplicate-free list of lowercase words.
///
/// Every word holds at least one letter, so any two candidates always
/// yield a question.
///
/// Cloning is cheap: the words are shared behind an `Arc`.
///
/// ```
/// use peek_guess::core::WordList;
///
/// let words = WordList::new(["Lion", "vierge"]).unwrap();
/// assert_eq!(words.as_slice(), &["lion".to_string(), "vierge".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Build a word list, lowercasing every entry.
    pub fn new<I, S>(words: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();

        for (index, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(EngineError::EmptyWord { index });
            }
            if !word.chars().any(|c| Letter::new(c).is_some()) {
                return Err(EngineError::NoLetters { word });
            }
            if !seen.insert(word.clone()) {
                return Err(EngineError::DuplicateWord { word });
            }
            out.push(word);
        }

        if out.is_empty() {
            return Err(EngineError::EmptyWordList);
        }

        Ok(Self { words: out.into() })
    }

    /// Words in their original order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word (any case) is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Iterate over the words.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for WordList {
    type Error = EngineError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.words.to_vec()
    }
}
