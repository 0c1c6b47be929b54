//! Engine errors.

use thiserror::Error;

/// Errors raised by word lists and the guess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("word at position {index} is empty")]
    EmptyWord { index: usize },

    #[error("word '{word}' has no letters")]
    NoLetters { word: String },

    #[error("word '{word}' appears more than once")]
    DuplicateWord { word: String },

    #[error("game has already converged; restart to play again")]
    AlreadyConverged,

    #[error("target '{target}' is not in the word list")]
    UnknownTarget { target: String },
}
