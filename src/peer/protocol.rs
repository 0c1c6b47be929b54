//! Line protocol spoken with the peer device.
//!
//! ## Outgoing
//!
//! Every line is `<marker><payload>\n`:
//! - a question: `$n`
//! - a solved word, upper-cased: `$LION`
//! - a connection check: `$Test`
//!
//! ## Incoming
//!
//! Button notifications are matched by substring: `button_left` is "no",
//! `button_right` is "yes", `button_side` restarts the game.

use crate::core::Letter;
use crate::input::InputEvent;

const BUTTON_LEFT: &str = "button_left";
const BUTTON_RIGHT: &str = "button_right";
const BUTTON_SIDE: &str = "button_side";

/// Encoder/decoder for peer lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerCodec {
    marker: char,
}

impl Default for PeerCodec {
    fn default() -> Self {
        Self { marker: '$' }
    }
}

impl PeerCodec {
    /// Create a codec with a custom marker.
    #[must_use]
    pub const fn new(marker: char) -> Self {
        Self { marker }
    }

    /// The marker prefixed to outgoing lines.
    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Frame an arbitrary payload.
    #[must_use]
    pub fn encode(&self, payload: &str) -> String {
        format!("{}{}\n", self.marker, payload)
    }

    /// Frame a question letter.
    #[must_use]
    pub fn encode_question(&self, letter: Letter) -> String {
        self.encode(&letter.to_string())
    }

    /// Frame a solved word, upper-cased for the peer display.
    #[must_use]
    pub fn encode_word(&self, word: &str) -> String {
        self.encode(&word.to_uppercase())
    }

    /// Frame the connection check line.
    #[must_use]
    pub fn encode_test(&self) -> String {
        self.encode("Test")
    }

    /// Decode a button notification.
    ///
    /// Returns `None` for anything that isn't a known button.
    #[must_use]
    pub fn decode(&self, message: &str) -> Option<InputEvent> {
        if message.contains(BUTTON_LEFT) {
            Some(InputEvent::NO)
        } else if message.contains(BUTTON_RIGHT) {
            Some(InputEvent::YES)
        } else if message.contains(BUTTON_SIDE) {
            Some(InputEvent::Restart)
        } else {
            None
        }
    }
}
