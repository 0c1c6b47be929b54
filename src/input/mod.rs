//! Answer sources.
//!
//! Every source boils down to an `InputEvent`; the engine does not care
//! whether an answer came from a swipe, a keyboard or a peer button.

pub mod keys;
pub mod swipe;

use serde::{Deserialize, Serialize};

pub use keys::parse_key;
pub use swipe::SwipeTracker;

/// A decoded user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Yes (`true`) or no (`false`) to the pending question.
    Answer(bool),
    /// Start over with the full word list.
    Restart,
}

impl InputEvent {
    pub const YES: Self = InputEvent::Answer(true);
    pub const NO: Self = InputEvent::Answer(false);
}

/// Where answers are expected to come from.
///
/// Peer button messages are always decoded; touch swipes only count with
/// `Swipe`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    #[default]
    Swipe,
    #[serde(alias = "bluetooth")]
    Peer,
}

impl InputMethod {
    /// Check if touch swipes are turned into answers.
    #[must_use]
    pub fn accepts_swipes(self) -> bool {
        matches!(self, InputMethod::Swipe)
    }
}
