//! Question/answer history.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::letter::Letter;

/// One answered question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The letter that was asked.
    pub letter: Letter,

    /// True if the answer was "yes, the word contains it".
    pub answer: bool,
}

impl HistoryEntry {
    /// Create a new history entry.
    #[must_use]
    pub const fn new(letter: Letter, answer: bool) -> Self {
        Self { letter, answer }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.answer { '↑' } else { '↓' };
        write!(f, "{}{}", self.letter, arrow)
    }
}

/// Append-only answer history.
///
/// Backed by `im::Vector` so snapshots of a game clone in O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vector<HistoryEntry>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answered question.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no question has been answered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Iterate in the order the answers were given.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn test_history_records_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(HistoryEntry::new(l('n'), true));
        history.record(HistoryEntry::new(l('a'), false));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&HistoryEntry::new(l('a'), false)));
        let letters: Vec<char> = history.iter().map(|e| e.letter.as_char()).collect();
        assert_eq!(letters, vec!['n', 'a']);
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.record(HistoryEntry::new(l('n'), true));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_display() {
        let mut history = History::new();
        history.record(HistoryEntry::new(l('n'), true));
        history.record(HistoryEntry::new(l('a'), false));
        assert_eq!(history.to_string(), "n↑ a↓");
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut history = History::new();
        history.record(HistoryEntry::new(l('n'), true));
        let snapshot = history.clone();
        history.record(HistoryEntry::new(l('l'), true));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(history.len(), 2);
    }
}
