//! Guess game state machine.
//!
//! ## Phases
//!
//! - `Asking`: more than one candidate left, a question can be asked.
//! - `Converged`: at most one candidate left. Terminal until `restart`.
//!
//! The phase depends on the candidate count alone. Anagrams such as
//! `rome`/`more` keep the game asking a letter both contain: "no" empties
//! the set, "yes" leaves it unchanged.
//!
//! The pending question is materialized lazily: it is computed the first
//! time it is needed, after each answer that leaves the game asking, and on
//! restart.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::EngineError;
use crate::core::history::{History, HistoryEntry};
use crate::core::letter::{contains_letter, Letter};
use crate::core::words::WordList;

use super::select::select_question;

/// How a converged game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Exactly one word is consistent with every answer.
    Solved(String),
    /// No word is consistent with the answers.
    NoMatch,
}

impl Verdict {
    /// The solved word, if any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Verdict::Solved(word) => Some(word),
            Verdict::NoMatch => None,
        }
    }
}

/// Game phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Asking,
    Converged(Verdict),
}

impl Phase {
    /// Check if the game is still asking questions.
    #[must_use]
    pub fn is_asking(&self) -> bool {
        matches!(self, Phase::Asking)
    }
}

/// Result of applying one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    /// The letter the answer referred to.
    pub asked: Letter,

    /// Phase after the answer.
    pub phase: Phase,

    /// Candidates left after filtering.
    pub remaining: usize,

    /// Next pending question, if the game is still asking.
    pub next_question: Option<Letter>,
}

/// A single guessing game over one word list.
///
/// ## Example
///
/// ```
/// use peek_guess::core::WordList;
/// use peek_guess::engine::{GuessGame, Verdict};
///
/// let words = WordList::new(["lion", "cancer", "vierge"]).unwrap();
/// let mut game = GuessGame::new(words);
///
/// while let Some(letter) = game.question() {
///     game.apply_answer("lion".contains(letter.as_char())).unwrap();
/// }
/// assert_eq!(game.verdict(), Some(&Verdict::Solved("lion".to_string())));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuessGame {
    words: WordList,
    candidates: Vector<String>,
    pending: Option<Letter>,
    history: History,
    phase: Phase,
}

impl GuessGame {
    /// Start a game with the full word list and an empty history.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        let candidates: Vector<String> = words.iter().map(str::to_string).collect();
        let phase = phase_for(&candidates);
        Self {
            words,
            candidates,
            pending: None,
            history: History::new(),
            phase,
        }
    }

    /// The word list the game was started with.
    #[must_use]
    pub fn initial_words(&self) -> &WordList {
        &self.words
    }

    /// Candidates still consistent with every answer, in original order.
    #[must_use]
    pub fn candidates(&self) -> &Vector<String> {
        &self.candidates
    }

    /// Answers given so far.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Check if the game has converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        !self.phase.is_asking()
    }

    /// The verdict once converged.
    #[must_use]
    pub fn verdict(&self) -> Option<&Verdict> {
        match &self.phase {
            Phase::Asking => None,
            Phase::Converged(verdict) => Some(verdict),
        }
    }

    /// The pending question without computing one.
    #[must_use]
    pub fn pending(&self) -> Option<Letter> {
        self.pending
    }

    /// The pending question, computing it if none is pending.
    ///
    /// Returns `None` once the game has converged.
    pub fn question(&mut self) -> Option<Letter> {
        if !self.phase.is_asking() {
            return None;
        }
        if self.pending.is_none() {
            self.pending = self.select();
        }
        self.pending
    }

    /// Apply a yes/no answer to the pending question.
    ///
    /// Fails with `AlreadyConverged` if the game is over.
    pub fn apply_answer(&mut self, is_yes: bool) -> Result<AnswerOutcome, EngineError> {
        let letter = self.question().ok_or(EngineError::AlreadyConverged)?;
        let before = self.candidates.len();

        self.history.record(HistoryEntry::new(letter, is_yes));
        self.candidates.retain(|word| contains_letter(word, letter) == is_yes);
        self.pending = None;
        self.phase = phase_for(&self.candidates);

        let remaining = self.candidates.len();
        debug!(letter = %letter, is_yes, before, remaining, "applied answer");

        let next_question = self.question();
        if let Phase::Converged(verdict) = &self.phase {
            debug!(?verdict, questions = self.history.len(), "game converged");
        }

        Ok(AnswerOutcome {
            asked: letter,
            phase: self.phase.clone(),
            remaining,
            next_question,
        })
    }

    /// Reset to the full word list and compute the first question.
    ///
    /// Calling it repeatedly leaves the same state as calling it once.
    pub fn restart(&mut self) -> Option<Letter> {
        self.candidates = self.words.iter().map(str::to_string).collect();
        self.history.clear();
        self.pending = None;
        self.phase = phase_for(&self.candidates);
        self.question()
    }

    fn select(&self) -> Option<Letter> {
        let slice: Vec<&str> = self.candidates.iter().map(String::as_str).collect();
        select_question(&slice)
    }
}

fn phase_for(candidates: &Vector<String>) -> Phase {
    match candidates.len() {
        0 => Phase::Converged(Verdict::NoMatch),
        1 => Phase::Converged(Verdict::Solved(candidates[0].clone())),
        _ => Phase::Asking,
    }
}
