//! Peer device communication.
//!
//! Reduced to two operations: send a line of text to the peer, and receive
//! a line of text from it. The framing lives in `protocol`, the transport
//! abstraction in `link`.

pub mod link;
pub mod protocol;

pub use link::{MemoryLink, PeerError, PeerLink, StreamLink};
pub use protocol::PeerCodec;
