//! Line transport to the peer device.
//!
//! The actual radio link lives outside this crate; anything that can send
//! and receive a line of text can stand in for it.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from a peer link.
#[derive(Debug, Error)]
pub enum PeerError {
    #[error("peer I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("peer link is closed")]
    Closed,
}

/// A bidirectional line link.
pub trait PeerLink {
    /// Send one already-framed line (including its trailing newline).
    fn send_line(&mut self, line: &str) -> Result<(), PeerError>;

    /// Receive one line, without its line terminator.
    ///
    /// Returns `Ok(None)` when the peer has nothing more to say.
    fn receive_line(&mut self) -> Result<Option<String>, PeerError>;
}

/// Link over a reader and a writer (stdio, a serial port, a socket).
#[derive(Debug)]
pub struct StreamLink<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamLink<R, W> {
    /// Create a link over a reader and a writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Take back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> PeerLink for StreamLink<R, W> {
    fn send_line(&mut self, line: &str) -> Result<(), PeerError> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn receive_line(&mut self) -> Result<Option<String>, PeerError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// In-memory link: an inbox of device messages and an outbox of sent lines.
#[derive(Clone, Debug, Default)]
pub struct MemoryLink {
    inbox: VecDeque<String>,
    outbox: Vec<String>,
    closed: bool,
}

impl MemoryLink {
    /// Create an empty link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a message as if the device had sent it.
    pub fn push_incoming(&mut self, message: impl Into<String>) {
        self.inbox.push_back(message.into());
    }

    /// Lines sent so far.
    #[must_use]
    pub fn sent(&self) -> &[String] {
        &self.outbox
    }

    /// Drain the lines sent so far.
    pub fn take_sent(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }

    /// Close the link; further sends fail.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl PeerLink for MemoryLink {
    fn send_line(&mut self, line: &str) -> Result<(), PeerError> {
        if self.closed {
            return Err(PeerError::Closed);
        }
        self.outbox.push(line.to_string());
        Ok(())
    }

    fn receive_line(&mut self) -> Result<Option<String>, PeerError> {
        Ok(self.inbox.pop_front())
    }
}
