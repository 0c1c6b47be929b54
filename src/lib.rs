//! # peek-guess
//!
//! A "20 questions" style guessing engine: the performer answers yes/no to
//! "does your word contain this letter?" until one word is left. Answers can
//! come from the screen or from a paired button device, and the engine's
//! questions and result can be echoed back to that device as text lines.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: question selection is a pure function of the
//!    candidate list; `GuessGame` holds all mutable state explicitly.
//!
//! 2. **Word lists are parameters**: the engine never owns a category
//!    catalog. Callers pick a `WordList` from the `catalog`.
//!
//! 3. **Transport at the edge**: the peer device is reduced to "send a line"
//!    and "receive a line" behind the `PeerLink` trait.
//!
//! ## Modules
//!
//! - `core`: letters, word lists, history, errors, RNG
//! - `engine`: question selection and the game state machine
//! - `catalog`: named word lists and TOML settings
//! - `input`: swipe and keyboard decoding into input events
//! - `peer`: line protocol and link trait for the button device
//! - `session`: drives a game from input events and mirrors it to a peer
//! - `sim`: truthful play-outs and solve statistics

pub mod catalog;
pub mod core;
pub mod engine;
pub mod input;
pub mod peer;
pub mod session;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    contains_letter, EngineError, GameRng, History, HistoryEntry, Letter, WordList,
};

pub use crate::engine::{select_question, AnswerOutcome, GuessGame, Phase, Verdict};

pub use crate::catalog::{CatalogError, Category, CategoryRegistry, ConfigError, Settings, ZODIAC};

pub use crate::input::{InputEvent, InputMethod, SwipeTracker};

pub use crate::peer::{MemoryLink, PeerCodec, PeerError, PeerLink, StreamLink};

pub use crate::session::{PeerStatus, Session, SessionError, SessionUpdate};

pub use crate::sim::{play_out, Ending, SolveReport, Trajectory};
