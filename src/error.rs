//! Framer error types.

use thiserror::Error;

/// Errors raised by framer configuration and stream processing.
///
/// Configuration variants (`PairingMismatch`, `EmptyDelimiter`,
/// `EmptyPairing`, `AmbiguousDelimiters`) can only occur at construction
/// time. Runtime variants (`OutOfBandData`, `OversizeMessage`) are fatal for
/// the in-progress message: the engine must be [`reset`] or discarded before
/// feeding further data.
///
/// [`reset`]: crate::FramerEngine::reset
#[derive(Debug, Error)]
pub enum FramerError {
    #[error("begin/end delimiter count mismatch: {begins} begins, {ends} ends")]
    PairingMismatch { begins: usize, ends: usize },

    #[error("delimiter must be at least one byte long")]
    EmptyDelimiter,

    #[error("delimiter pairing must contain at least one begin/end pair")]
    EmptyPairing,

    #[error("begin delimiter {shorter} is a prefix of begin delimiter {longer}")]
    AmbiguousDelimiters { shorter: usize, longer: usize },

    #[error("out-of-band data: byte {byte:#04x} cannot extend any begin delimiter")]
    OutOfBandData { byte: u8 },

    #[error("message too large: {size} bytes (max {max})")]
    OversizeMessage { size: usize, max: usize },
}

impl FramerError {
    /// Returns whether this error was raised during stream processing, as
    /// opposed to construction-time validation.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(
            self,
            FramerError::OutOfBandData { .. } | FramerError::OversizeMessage { .. }
        )
    }
}
