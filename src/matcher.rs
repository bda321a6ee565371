//! Incremental prefix matching against delimiter candidates.
//!
//! A [`PrefixMatcher`] is fed one byte at a time and tracks whether the
//! bytes absorbed so far are still a valid prefix of at least one candidate
//! delimiter. Matching state survives call boundaries, so a delimiter split
//! across arbitrary input chunks matches exactly as if it had arrived whole.

use crate::delimiter::Delimiter;
use bytes::{BufMut, BytesMut};

/// Result of advancing the matcher by one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// Pending bytes plus the new byte equal candidate `i`'s full delimiter.
    Complete(usize),
    /// Pending bytes plus the new byte remain a strict prefix of at least
    /// one candidate; the byte was absorbed into the pending buffer.
    Partial,
    /// No candidate remains viable. The previously pending bytes must be
    /// reclaimed with [`PrefixMatcher::take_pending`]; after a
    /// [`restart`](PrefixMatcher::restart) the failing byte may be re-tried
    /// as the first byte of a fresh match attempt.
    Failed,
}

/// Byte-by-byte matcher over a fixed set of delimiter candidates.
///
/// The caller must pass the same `candidates` slice to every
/// [`advance`](Self::advance) call within one match attempt; viability is
/// tracked by candidate index.
#[derive(Debug)]
pub struct PrefixMatcher {
    /// Indexes of candidates the pending buffer is still a prefix of.
    viable: Vec<usize>,
    /// Bytes tentatively matched; neither confirmed payload nor a
    /// completed delimiter yet.
    pending: BytesMut,
}

impl PrefixMatcher {
    /// Creates a matcher with all `candidate_count` candidates viable.
    pub fn new(candidate_count: usize) -> Self {
        Self {
            viable: (0..candidate_count).collect(),
            pending: BytesMut::new(),
        }
    }

    /// Advances the match attempt by one byte.
    ///
    /// On [`MatchStep::Complete`] the pending buffer is cleared — the
    /// matched delimiter is consumed. On [`MatchStep::Failed`] the pending
    /// buffer is left intact for [`take_pending`](Self::take_pending).
    pub fn advance(&mut self, candidates: &[Delimiter], byte: u8) -> MatchStep {
        let pos = self.pending.len();
        self.viable.retain(|&i| {
            let cand = candidates[i].as_bytes();
            cand.len() > pos && cand[pos] == byte
        });

        // Construction-time prefix validation guarantees at most one
        // candidate can complete at any position.
        if let Some(&i) = self
            .viable
            .iter()
            .find(|&&i| candidates[i].len() == pos + 1)
        {
            self.pending.clear();
            return MatchStep::Complete(i);
        }

        if self.viable.is_empty() {
            MatchStep::Failed
        } else {
            self.pending.put_u8(byte);
            MatchStep::Partial
        }
    }

    /// Takes the pending buffer, leaving it empty.
    ///
    /// Called after [`MatchStep::Failed`] to reclaim the bytes that turned
    /// out not to be a delimiter after all.
    pub fn take_pending(&mut self) -> BytesMut {
        std::mem::take(&mut self.pending)
    }

    /// Bytes currently held as a tentative delimiter prefix.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Begins a fresh match attempt over `candidate_count` candidates.
    pub fn restart(&mut self, candidate_count: usize) {
        self.viable.clear();
        self.viable.extend(0..candidate_count);
        self.pending.clear();
    }
}
