//! Truthful play-outs.
//!
//! Plays the engine against a known target, answering every question
//! truthfully, to measure how many questions a word list needs.
//!
//! ## Usage
//!
//! ```
//! use peek_guess::catalog::{CategoryRegistry, ZODIAC};
//! use peek_guess::sim::{play_out, SolveReport};
//!
//! let registry = CategoryRegistry::with_builtins();
//! let words = registry.get(ZODIAC).unwrap();
//!
//! let trajectory = play_out(words, "lion").unwrap();
//! assert_eq!(trajectory.question_count(), 3);
//!
//! let report = SolveReport::for_words(words).unwrap();
//! assert_eq!(report.max_questions, 4);
//! ```

pub mod report;
pub mod trajectory;

pub use report::{SolveReport, TargetResult};
pub use trajectory::{play_out, Ending, Trajectory};
