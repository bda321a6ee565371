//! # delimframe
//!
//! Streaming delimiter-based message framing: reconstructing discrete
//! messages out of a continuous byte stream arriving in arbitrary chunk
//! sizes, where each message opens with a configurable begin byte sequence
//! and closes with its paired end sequence.
//!
//! This crate provides:
//! - Incremental prefix matching that survives chunk boundaries
//! - Multiple begin/end delimiter pairs, selected per message
//! - Strict rejection of out-of-band bytes between messages
//! - A configurable bound on message payload size
//!
//! The framer is sans-io: it performs no transport work, never blocks, and
//! does not interpret message contents. Feed it bytes in transport order
//! and drain completed messages; splitting the stream one byte per call
//! produces exactly the same messages as feeding it whole.
//!
//! ```
//! use delimframe::Framer;
//!
//! let mut framer = Framer::delimited([b"<beg>"], [b"<end>"], 0)?;
//! framer.data_received(b"<beg>te")?;
//! framer.data_received(b"st<end>")?;
//!
//! let message = framer.next_message().unwrap();
//! assert_eq!(&message.payload[..], b"test");
//! # Ok::<(), delimframe::FramerError>(())
//! ```

pub mod delimiter;
pub mod engine;
pub mod error;
pub mod framer;
pub mod matcher;

pub use delimiter::{Delimiter, DelimiterPairing};
pub use engine::{FramerEngine, Message};
pub use error::FramerError;
pub use framer::Framer;
pub use matcher::{MatchStep, PrefixMatcher};
