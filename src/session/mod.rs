//! A game session: input events in, engine updates, peer lines out.
//!
//! The session owns exactly one `GuessGame` and an optional peer link. It
//! applies events in the order they arrive and, when a link is attached,
//! mirrors the game on the peer display:
//!
//! - after an answer that leaves the game asking: the next question
//! - on a solved game: the word, upper-cased
//! - after a restart: the first question
//!
//! Nothing is sent when the game ends in `NoMatch`.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::{EngineError, Letter};
use crate::engine::{AnswerOutcome, GuessGame, Phase, Verdict};
use crate::input::{InputEvent, SwipeTracker};
use crate::peer::{PeerCodec, PeerError, PeerLink};

/// Errors raised while driving a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Peer(#[from] PeerError),
}

/// Whether a peer link is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerStatus {
    Disconnected,
    Connected,
}

/// What happened in response to one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionUpdate {
    /// An answer was applied.
    Answered(AnswerOutcome),
    /// The game was restarted; carries the first question.
    Restarted(Option<Letter>),
    /// The event had no effect (answer after convergence, short or
    /// disabled swipe, unrecognised peer message).
    Ignored,
}

/// Drives a `GuessGame` from input events and echoes it to a peer.
pub struct Session<L: PeerLink> {
    game: GuessGame,
    link: Option<L>,
    codec: PeerCodec,
    swipe: Option<SwipeTracker>,
}

impl<L: PeerLink> Session<L> {
    /// Create a session without a peer.
    #[must_use]
    pub fn new(game: GuessGame, codec: PeerCodec) -> Self {
        Self {
            game,
            link: None,
            codec,
            swipe: None,
        }
    }

    /// Accept touch swipes through `tracker`; `None` ignores them.
    #[must_use]
    pub fn with_swipe(mut self, tracker: Option<SwipeTracker>) -> Self {
        self.swipe = tracker;
        self
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &GuessGame {
        &self.game
    }

    /// Current pending question, computed if needed.
    pub fn question(&mut self) -> Option<Letter> {
        self.game.question()
    }

    /// Attach a peer link, replacing any previous one.
    ///
    /// Sends the pending question so the peer display starts in sync.
    pub fn attach(&mut self, link: L) -> Result<(), SessionError> {
        self.link = Some(link);
        info!("peer attached");
        if let Some(letter) = self.game.question() {
            let line = self.codec.encode_question(letter);
            self.send(&line)?;
        }
        Ok(())
    }

    /// Detach the peer link and hand it back.
    pub fn detach(&mut self) -> Option<L> {
        let link = self.link.take();
        if link.is_some() {
            info!("peer detached");
        }
        link
    }

    /// Peer connection status.
    #[must_use]
    pub fn status(&self) -> PeerStatus {
        if self.link.is_some() {
            PeerStatus::Connected
        } else {
            PeerStatus::Disconnected
        }
    }

    /// Borrow the attached link.
    #[must_use]
    pub fn link(&self) -> Option<&L> {
        self.link.as_ref()
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: InputEvent) -> Result<SessionUpdate, SessionError> {
        match event {
            InputEvent::Answer(is_yes) => self.answer(is_yes),
            InputEvent::Restart => self.restart(),
        }
    }

    /// Record where a touch began. No-op when swipes are disabled.
    pub fn touch_start(&mut self, y: f32) {
        if let Some(swipe) = self.swipe.as_mut() {
            swipe.touch_start(y);
        }
    }

    /// Finish a touch and handle the swipe, if it is one.
    pub fn touch_end(&mut self, y: f32) -> Result<SessionUpdate, SessionError> {
        let Some(swipe) = self.swipe.as_mut() else {
            debug!(y, "swipe ignored, swipes disabled");
            return Ok(SessionUpdate::Ignored);
        };
        match swipe.touch_end(y) {
            Some(event) => self.handle(event),
            None => Ok(SessionUpdate::Ignored),
        }
    }

    /// Receive one line from the peer and handle it.
    ///
    /// Returns `Ok(None)` when the peer has nothing more to send, and
    /// `Ok(Some(SessionUpdate::Ignored))` for unrecognised messages.
    pub fn poll_peer(&mut self) -> Result<Option<SessionUpdate>, SessionError> {
        let Some(link) = self.link.as_mut() else {
            return Ok(None);
        };
        let Some(message) = link.receive_line()? else {
            return Ok(None);
        };

        debug!(%message, "peer message");
        match self.codec.decode(&message) {
            Some(event) => self.handle(event).map(Some),
            None => {
                warn!(%message, "unrecognised peer message");
                Ok(Some(SessionUpdate::Ignored))
            }
        }
    }

    /// Send the connection check line.
    pub fn send_test(&mut self) -> Result<(), SessionError> {
        let line = self.codec.encode_test();
        self.send(&line)
    }

    fn answer(&mut self, is_yes: bool) -> Result<SessionUpdate, SessionError> {
        if self.game.is_converged() {
            debug!(is_yes, "answer ignored, game already converged");
            return Ok(SessionUpdate::Ignored);
        }

        let outcome = self.game.apply_answer(is_yes)?;

        match &outcome.phase {
            Phase::Asking => {
                if let Some(next) = outcome.next_question {
                    let line = self.codec.encode_question(next);
                    self.send(&line)?;
                }
            }
            Phase::Converged(Verdict::Solved(word)) => {
                info!(%word, questions = self.game.history().len(), "solved");
                let line = self.codec.encode_word(word);
                self.send(&line)?;
            }
            Phase::Converged(Verdict::NoMatch) => {
                info!(questions = self.game.history().len(), "no word matches the answers");
            }
        }

        Ok(SessionUpdate::Answered(outcome))
    }

    fn restart(&mut self) -> Result<SessionUpdate, SessionError> {
        let first = self.game.restart();
        info!(first = ?first, "restarted");
        if let Some(letter) = first {
            let line = self.codec.encode_question(letter);
            self.send(&line)?;
        }
        Ok(SessionUpdate::Restarted(first))
    }

    fn send(&mut self, line: &str) -> Result<(), SessionError> {
        if let Some(link) = self.link.as_mut() {
            debug!(line = line.trim_end(), "to peer");
            link.send_line(line)?;
        }
        Ok(())
    }
}
