//! Configuration facades over the framing engine.
//!
//! Two front-ends, one engine: [`Framer::single_byte`] for the degenerate
//! one-byte-delimiter configuration and [`Framer::delimited`] for arbitrary
//! multi-byte, multi-pair configurations. Both drive the same
//! [`FramerEngine`] state machine underneath.

use crate::delimiter::{Delimiter, DelimiterPairing};
use crate::engine::{FramerEngine, Message};
use crate::error::FramerError;

/// Streaming framer for one logical transport stream.
///
/// Feed transport chunks with [`data_received`](Self::data_received) and
/// drain completed messages with [`next_message`](Self::next_message).
/// Callers must serialize access per stream; `&mut self` enforces this at
/// the type level.
#[derive(Debug)]
pub struct Framer {
    engine: FramerEngine,
}

impl Framer {
    /// Creates a framer with one single-byte begin/end pair.
    ///
    /// A length-1 delimiter has no non-trivial prefix, so single-byte
    /// configurations are always valid and construction cannot fail.
    /// `max_message_size` of 0 means unbounded.
    pub fn single_byte(begin: u8, end: u8, max_message_size: usize) -> Self {
        Self {
            engine: FramerEngine::new(
                DelimiterPairing::single_byte(begin, end),
                max_message_size,
            ),
        }
    }

    /// Creates a framer with arbitrary begin/end delimiter pairs, matched
    /// by index.
    ///
    /// `begins` and `ends` must be the same non-zero length, every
    /// delimiter must be non-empty, and no begin delimiter may be a prefix
    /// of another (see [`DelimiterPairing::new`]). `max_message_size` of 0
    /// means unbounded.
    pub fn delimited<B, E>(
        begins: impl IntoIterator<Item = B>,
        ends: impl IntoIterator<Item = E>,
        max_message_size: usize,
    ) -> Result<Self, FramerError>
    where
        B: AsRef<[u8]>,
        E: AsRef<[u8]>,
    {
        let begins = begins
            .into_iter()
            .map(Delimiter::new)
            .collect::<Result<Vec<_>, _>>()?;
        let ends = ends
            .into_iter()
            .map(Delimiter::new)
            .collect::<Result<Vec<_>, _>>()?;
        let pairing = DelimiterPairing::new(begins, ends)?;
        Ok(Self {
            engine: FramerEngine::new(pairing, max_message_size),
        })
    }

    /// Creates a framer over an already-validated pairing.
    pub fn with_pairing(pairing: DelimiterPairing, max_message_size: usize) -> Self {
        Self {
            engine: FramerEngine::new(pairing, max_message_size),
        }
    }

    /// Feeds the next chunk of transport bytes.
    ///
    /// Chunks must arrive in transport order; their boundaries are
    /// otherwise irrelevant. Completed messages queue up in stream order.
    ///
    /// After an error the stream is unrecoverable for the in-progress
    /// message: [`reset`](Self::reset) before feeding again, or discard the
    /// framer with its connection.
    pub fn data_received(&mut self, data: &[u8]) -> Result<(), FramerError> {
        self.engine.feed(data)
    }

    /// Takes the next completed message, oldest first.
    pub fn next_message(&mut self) -> Option<Message> {
        self.engine.next_message()
    }

    /// Bytes currently held for the in-progress message.
    pub fn buffered(&self) -> usize {
        self.engine.buffered()
    }

    /// Returns to the initial awaiting-begin state, discarding any
    /// in-progress match or payload. No message is emitted for work in
    /// progress; already-completed messages remain drainable.
    pub fn reset(&mut self) {
        self.engine.reset();
    }
}
