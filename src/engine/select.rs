//! Picking the next discriminating letter.
//!
//! The best question is the letter whose "contains" side is closest to
//! half of the candidates. Letters are considered in the order they are
//! first seen across the list; a later letter only wins on a strictly
//! better score, so ties go to the earliest letter.

use rustc_hash::FxHashMap;

use crate::core::letter::{distinct_letters, Letter};

/// How many candidates contain each letter, in first-seen order.
///
/// A word containing a letter twice counts once.
#[must_use]
pub fn letter_frequencies<S: AsRef<str>>(candidates: &[S]) -> Vec<(Letter, usize)> {
    let mut order: Vec<(Letter, usize)> = Vec::new();
    let mut index: FxHashMap<Letter, usize> = FxHashMap::default();

    for word in candidates {
        for letter in distinct_letters(word.as_ref()) {
            match index.get(&letter) {
                Some(&slot) => order[slot].1 += 1,
                None => {
                    index.insert(letter, order.len());
                    order.push((letter, 1));
                }
            }
        }
    }

    order
}

/// Distance from a perfect half split, doubled to stay in integers.
///
/// `split_score(n, f) == 2 * |n/2 - f|`.
#[must_use]
pub fn split_score(candidate_count: usize, frequency: usize) -> usize {
    candidate_count.abs_diff(2 * frequency)
}

/// Choose the next question for a candidate set.
///
/// Returns `None` when one or zero candidates remain. Two or more words
/// from a `WordList` always produce a letter; a raw slice without any
/// letters produces `None`.
///
/// The chosen letter need not split the set: for anagrams such as
/// `"rome"` and `"more"` every letter is in every word, and the first one
/// is returned.
///
/// ```
/// use peek_guess::engine::select_question;
///
/// let q = select_question(&["lion", "cancer", "vierge", "balance"]).unwrap();
/// assert_eq!(q.as_char(), 'l');
/// assert!(select_question(&["lion"]).is_none());
/// ```
#[must_use]
pub fn select_question<S: AsRef<str>>(candidates: &[S]) -> Option<Letter> {
    if candidates.len() <= 1 {
        return None;
    }

    let n = candidates.len();
    let mut best: Option<(Letter, usize)> = None;

    for (letter, frequency) in letter_frequencies(candidates) {
        let score = split_score(n, frequency);
        // Strict comparison: equal scores never replace an earlier letter.
        if best.map_or(true, |(_, best_score)| score < best_score) {
            best = Some((letter, score));
        }
    }

    best.map(|(letter, _)| letter)
}
