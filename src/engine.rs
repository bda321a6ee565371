//! The core framing state machine.
//!
//! A [`FramerEngine`] consumes transport bytes in arbitrary chunks and
//! reconstructs discrete messages delimited by a configured
//! [`DelimiterPairing`]. Completed messages are queued in strict stream
//! order during [`feed`](FramerEngine::feed) and drained with
//! [`next_message`](FramerEngine::next_message).

use crate::delimiter::DelimiterPairing;
use crate::error::FramerError;
use crate::matcher::{MatchStep, PrefixMatcher};
use bytes::{BufMut, Bytes, BytesMut};
use std::collections::VecDeque;

/// A completed message extracted from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Message payload, delimiters excluded.
    pub payload: Bytes,
    /// Index of the begin/end pair that framed this message.
    pub pair: usize,
}

/// Framing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Matching incoming bytes against all begin delimiters.
    AwaitingBegin,
    /// A begin delimiter matched; accumulating payload until the paired
    /// end delimiter completes.
    InMessage { pair: usize },
}

/// Streaming delimiter framer.
///
/// One engine per logical stream. Configuration (the pairing and the size
/// bound) is fixed for the engine's lifetime; [`reset`](Self::reset)
/// restores the initial state without touching it.
///
/// Processing is synchronous and single-threaded: `feed` runs the state
/// machine to completion for the supplied chunk before returning. Input
/// slices are copied into engine-owned buffers, never retained.
///
/// After a runtime error ([`FramerError::OutOfBandData`] or
/// [`FramerError::OversizeMessage`]) the in-progress message is lost and the
/// engine must be `reset` or discarded before further feeding.
#[derive(Debug)]
pub struct FramerEngine {
    pairing: DelimiterPairing,
    /// Maximum confirmed payload length; 0 = unbounded. Bytes still pending
    /// as a tentative end-delimiter prefix do not count until confirmed.
    max_message_size: usize,
    phase: Phase,
    matcher: PrefixMatcher,
    payload: BytesMut,
    completed: VecDeque<Message>,
}

impl FramerEngine {
    /// Creates an engine over a validated pairing.
    ///
    /// `max_message_size` bounds the confirmed payload length per message;
    /// `0` disables the bound.
    pub fn new(pairing: DelimiterPairing, max_message_size: usize) -> Self {
        let candidates = pairing.len();
        Self {
            pairing,
            max_message_size,
            phase: Phase::AwaitingBegin,
            matcher: PrefixMatcher::new(candidates),
            payload: BytesMut::new(),
            completed: VecDeque::new(),
        }
    }

    /// Feeds the next chunk of transport bytes, in stream order.
    ///
    /// Zero or more messages may complete during this call; drain them with
    /// [`next_message`](Self::next_message). Chunk boundaries are
    /// irrelevant: feeding one byte at a time produces the same messages in
    /// the same order as feeding the whole stream at once.
    pub fn feed(&mut self, data: &[u8]) -> Result<(), FramerError> {
        for &byte in data {
            match self.phase {
                Phase::AwaitingBegin => self.feed_awaiting_begin(byte)?,
                Phase::InMessage { pair } => self.feed_in_message(pair, byte)?,
            }
        }
        Ok(())
    }

    fn feed_awaiting_begin(&mut self, byte: u8) -> Result<(), FramerError> {
        match self.matcher.advance(self.pairing.begins(), byte) {
            MatchStep::Complete(pair) => {
                tracing::trace!("begin delimiter matched (pair {})", pair);
                self.payload.clear();
                self.matcher.restart(1);
                self.phase = Phase::InMessage { pair };
                Ok(())
            }
            MatchStep::Partial => Ok(()),
            // Bytes outside a message are never reinterpreted as payload.
            MatchStep::Failed => Err(FramerError::OutOfBandData { byte }),
        }
    }

    fn feed_in_message(&mut self, pair: usize, byte: u8) -> Result<(), FramerError> {
        let end = std::slice::from_ref(self.pairing.end(pair));
        loop {
            match self.matcher.advance(end, byte) {
                MatchStep::Complete(_) => {
                    let payload = std::mem::take(&mut self.payload).freeze();
                    tracing::trace!("message framed: {} bytes (pair {})", payload.len(), pair);
                    self.completed.push_back(Message { payload, pair });
                    self.matcher.restart(self.pairing.len());
                    self.phase = Phase::AwaitingBegin;
                    return Ok(());
                }
                MatchStep::Partial => return Ok(()),
                MatchStep::Failed => {
                    let pending = self.matcher.take_pending();
                    self.matcher.restart(1);
                    if pending.is_empty() {
                        // The byte neither extends a match nor starts one.
                        self.payload.put_u8(byte);
                        self.check_size()?;
                        return Ok(());
                    }
                    // What looked like an end delimiter wasn't one: the
                    // pending bytes are payload after all, and the failing
                    // byte gets a fresh match attempt.
                    self.payload.extend_from_slice(&pending);
                    self.check_size()?;
                }
            }
        }
    }

    fn check_size(&self) -> Result<(), FramerError> {
        if self.max_message_size != 0 && self.payload.len() > self.max_message_size {
            return Err(FramerError::OversizeMessage {
                size: self.payload.len(),
                max: self.max_message_size,
            });
        }
        Ok(())
    }

    /// Takes the next completed message, oldest first.
    pub fn next_message(&mut self) -> Option<Message> {
        self.completed.pop_front()
    }

    /// Number of bytes currently held for the in-progress message
    /// (confirmed payload plus tentatively matched delimiter prefix).
    pub fn buffered(&self) -> usize {
        self.payload.len() + self.matcher.pending().len()
    }

    /// Discards all in-progress matching and payload state, returning to
    /// the initial awaiting-begin state. The fixed configuration is
    /// untouched, and messages that already completed remain drainable.
    pub fn reset(&mut self) {
        tracing::trace!("framer reset ({} bytes discarded)", self.buffered());
        self.phase = Phase::AwaitingBegin;
        self.matcher.restart(self.pairing.len());
        self.payload.clear();
    }
}
