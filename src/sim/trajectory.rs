//! A single truthful play-out.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{contains_letter, EngineError, HistoryEntry, WordList};
use crate::engine::{GuessGame, Verdict};

/// How a play-out ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// The game converged.
    Converged(Verdict),
    /// The pending letter is in every candidate, so a truthful answer
    /// cannot narrow the set any further. Holds the remaining words.
    Stalled(Vec<String>),
}

/// Record of one play-out against a known target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    /// The word being guessed.
    pub target: String,

    /// Questions asked with the truthful answers, in order.
    pub steps: Vec<HistoryEntry>,

    /// Candidate count before each question, then the final count.
    pub remaining: Vec<usize>,

    /// How the play-out ended.
    pub ending: Ending,
}

impl Trajectory {
    /// Number of questions asked.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.steps.len()
    }

    /// Did the game end on the target word?
    #[must_use]
    pub fn found_target(&self) -> bool {
        match &self.ending {
            Ending::Converged(verdict) => verdict.word() == Some(self.target.as_str()),
            Ending::Stalled(_) => false,
        }
    }
}

/// Play a game answering truthfully about `target`.
///
/// Fails with `UnknownTarget` if the target is not in `words`. Always
/// terminates: every answered question removes at least one candidate, and
/// the play-out stops as `Stalled` before a question that could not.
pub fn play_out(words: &WordList, target: &str) -> Result<Trajectory, EngineError> {
    let target = target.trim().to_lowercase();
    if !words.contains(&target) {
        return Err(EngineError::UnknownTarget { target });
    }

    let mut game = GuessGame::new(words.clone());
    let mut steps = Vec::new();
    let mut remaining = vec![game.candidates().len()];

    while let Some(letter) = game.question() {
        if game.candidates().iter().all(|word| contains_letter(word, letter)) {
            debug!(%target, letter = %letter, remaining = game.candidates().len(), "play-out stalled");
            let rest = game.candidates().iter().cloned().collect();
            return Ok(Trajectory {
                target,
                steps,
                remaining,
                ending: Ending::Stalled(rest),
            });
        }

        let answer = contains_letter(&target, letter);
        let outcome = game.apply_answer(answer)?;
        trace!(%target, letter = %letter, answer, remaining = outcome.remaining, "play-out step");
        steps.push(HistoryEntry::new(letter, answer));
        remaining.push(outcome.remaining);
    }

    let ending = Ending::Converged(game.verdict().cloned().unwrap_or(Verdict::NoMatch));

    Ok(Trajectory {
        target,
        steps,
        remaining,
        ending,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CategoryRegistry, ZODIAC};
    use crate::core::Letter;

    fn zodiac() -> WordList {
        CategoryRegistry::with_builtins().get(ZODIAC).unwrap().clone()
    }

    #[test]
    fn test_play_out_lion() {
        let t = play_out(&zodiac(), "Lion").unwrap();

        let asked: Vec<(char, bool)> = t.steps.iter().map(|s| (s.letter.as_char(), s.answer)).collect();
        assert_eq!(asked, vec![('n', true), ('a', false), ('l', true)]);
        assert_eq!(t.remaining.first(), Some(&12));
        assert_eq!(t.remaining.last(), Some(&1));
        assert!(t.found_target());
    }

    #[test]
    fn test_play_out_unknown_target() {
        assert_eq!(
            play_out(&zodiac(), "dragon"),
            Err(EngineError::UnknownTarget { target: "dragon".to_string() })
        );
    }

    #[test]
    fn test_play_out_anagram_target() {
        let words = WordList::new(["rome", "more", "lion"]).unwrap();
        let t = play_out(&words, "more").unwrap();

        assert_eq!(t.steps, vec![HistoryEntry::new(Letter::new('r').unwrap(), true)]);
        assert!(!t.found_target());
        assert_eq!(t.remaining, vec![3, 2]);
        assert_eq!(t.ending, Ending::Stalled(vec!["rome".to_string(), "more".to_string()]));
    }

    #[test]
    fn test_trajectory_serialization() {
        let t = play_out(&zodiac(), "cancer").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Trajectory = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
