//! The guess engine.
//!
//! - `select`: pure question selection over a candidate slice
//! - `game`: the `GuessGame` state machine (answers, convergence, restart)
//!
//! The engine performs no I/O. Sending questions or answers to a peer
//! device is done by `session` in response to the returned outcomes.

pub mod game;
pub mod select;

pub use game::{AnswerOutcome, GuessGame, Phase, Verdict};
pub use select::{letter_frequencies, select_question, split_score};
