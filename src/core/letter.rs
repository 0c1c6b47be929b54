//! Letters used as questions.
//!
//! A `Letter` is always stored lowercase so membership tests are
//! case-insensitive on both sides.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A single lowercase letter asked as a yes/no question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Letter(char);

impl Letter {
    /// Create a letter, folding it to lowercase.
    ///
    /// Returns `None` for characters that are not alphabetic.
    ///
    /// ```
    /// use peek_guess::core::Letter;
    ///
    /// assert_eq!(Letter::new('N'), Letter::new('n'));
    /// assert!(Letter::new('7').is_none());
    /// ```
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        if !c.is_alphabetic() {
            return None;
        }
        Some(Self(fold(c)))
    }

    /// Get the lowercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Upper-case form, used when echoing to a peer display.
    #[must_use]
    pub fn to_uppercase(self) -> String {
        self.0.to_uppercase().collect()
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase a single char, keeping it as-is when the lowercase form
/// expands to several chars.
fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Does `word` contain `letter`, ignoring case?
#[must_use]
pub fn contains_letter(word: &str, letter: Letter) -> bool {
    word.chars().any(|c| fold(c) == letter.0)
}

/// Distinct letters of a word in first-occurrence order.
///
/// Non-alphabetic characters (spaces, hyphens, digits) are skipped.
#[must_use]
pub fn distinct_letters(word: &str) -> SmallVec<[Letter; 16]> {
    let mut out: SmallVec<[Letter; 16]> = SmallVec::new();
    for letter in word.chars().filter_map(Letter::new) {
        if !out.contains(&letter) {
            out.push(letter);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_letter_folds_case() {
        assert_eq!(l('A'), l('a'));
        assert_eq!(l('É').as_char(), 'é');
        assert_eq!(l('q').to_string(), "q");
        assert_eq!(l('q').to_uppercase(), "Q");
    }

    #[test]
    fn test_letter_rejects_non_alphabetic() {
        assert!(Letter::new(' ').is_none());
        assert!(Letter::new('-').is_none());
        assert!(Letter::new('3').is_none());
    }

    #[test]
    fn test_contains_letter_case_insensitive() {
        assert!(contains_letter("Lion", l('l')));
        assert!(contains_letter("lion", l('L')));
        assert!(!contains_letter("lion", l('a')));
    }

    #[test]
    fn test_distinct_letters_order() {
        let letters: Vec<char> = distinct_letters("poissons").iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, vec!['p', 'o', 'i', 's', 'n']);
    }

    #[test]
    fn test_distinct_letters_skips_separators() {
        let letters: Vec<char> = distinct_letters("New-York 2").iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, vec!['n', 'e', 'w', 'y', 'o', 'r', 'k']);
    }

    #[test]
    fn test_letter_serialization() {
        let json = serde_json::to_string(&l('x')).unwrap();
        let back: Letter = serde_json::from_str(&json).unwrap();
        assert_eq!(back, l('x'));
    }
}
