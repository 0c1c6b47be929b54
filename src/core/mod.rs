//! Core value types shared by the engine, session and simulations.

pub mod error;
pub mod history;
pub mod letter;
pub mod rng;
pub mod words;

pub use error::EngineError;
pub use history::{History, HistoryEntry};
pub use letter::{contains_letter, distinct_letters, Letter};
pub use rng::GameRng;
pub use words::WordList;
