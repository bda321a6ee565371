//! Delimiter types and construction-time validation.
//!
//! A [`Delimiter`] is an immutable, non-empty byte sequence marking the
//! start or end of a message. A [`DelimiterPairing`] holds two
//! index-correlated lists of them: the begin delimiter at index `i` is
//! paired exclusively with the end delimiter at index `i`.
//!
//! All validation happens here, once, before any stream data is processed.

use crate::error::FramerError;
use bytes::Bytes;

/// An immutable byte sequence marking the start or end of a message.
///
/// Always at least one byte long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter(Bytes);

impl Delimiter {
    /// Creates a delimiter from a byte sequence.
    ///
    /// Returns [`FramerError::EmptyDelimiter`] for an empty sequence.
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self, FramerError> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Err(FramerError::EmptyDelimiter);
        }
        Ok(Self(Bytes::copy_from_slice(bytes)))
    }

    /// Creates a single-byte delimiter.
    pub fn from_byte(byte: u8) -> Self {
        Self(Bytes::copy_from_slice(&[byte]))
    }

    /// The delimiter bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the delimiter in bytes. Always ≥ 1.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether `self` is a strict or full prefix of `other`.
    fn is_prefix_of(&self, other: &Delimiter) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl AsRef<[u8]> for Delimiter {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Index-paired begin/end delimiter lists, validated at construction.
#[derive(Debug, Clone)]
pub struct DelimiterPairing {
    begins: Vec<Delimiter>,
    ends: Vec<Delimiter>,
}

impl DelimiterPairing {
    /// Creates a pairing from two index-correlated delimiter lists.
    ///
    /// Validation, performed once here and never re-evaluated:
    /// - the lists must be the same length ([`FramerError::PairingMismatch`]),
    /// - at least one pair must be present ([`FramerError::EmptyPairing`]),
    /// - no begin delimiter may be a prefix of (or equal to) another begin
    ///   delimiter ([`FramerError::AmbiguousDelimiters`]) — begin matching
    ///   runs all candidates at once and exactly one must be able to
    ///   complete.
    ///
    /// End delimiters carry no prefix restriction: end matching only ever
    /// searches the active pair's single end delimiter, so different pairs
    /// may reuse identical ends.
    pub fn new(begins: Vec<Delimiter>, ends: Vec<Delimiter>) -> Result<Self, FramerError> {
        if begins.len() != ends.len() {
            return Err(FramerError::PairingMismatch {
                begins: begins.len(),
                ends: ends.len(),
            });
        }
        if begins.is_empty() {
            return Err(FramerError::EmptyPairing);
        }
        for i in 0..begins.len() {
            for j in 0..begins.len() {
                if i != j && begins[i].is_prefix_of(&begins[j]) {
                    return Err(FramerError::AmbiguousDelimiters {
                        shorter: i,
                        longer: j,
                    });
                }
            }
        }
        Ok(Self { begins, ends })
    }

    /// Creates the degenerate single-byte, single-pair configuration.
    ///
    /// A one-byte begin paired with a one-byte end is trivially valid, so
    /// this constructor cannot fail.
    pub fn single_byte(begin: u8, end: u8) -> Self {
        Self {
            begins: vec![Delimiter::from_byte(begin)],
            ends: vec![Delimiter::from_byte(end)],
        }
    }

    /// Number of begin/end pairs. Always ≥ 1.
    pub fn len(&self) -> usize {
        self.begins.len()
    }

    /// All begin delimiter candidates.
    pub fn begins(&self) -> &[Delimiter] {
        &self.begins
    }

    /// The end delimiter paired with begin index `pair`.
    ///
    /// # Panics
    ///
    /// Panics if `pair` is out of range. The engine only passes indexes it
    /// received from a completed begin match.
    pub fn end(&self, pair: usize) -> &Delimiter {
        &self.ends[pair]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delims(raw: &[&[u8]]) -> Vec<Delimiter> {
        raw.iter().map(|d| Delimiter::new(d).unwrap()).collect()
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let result = Delimiter::new(b"");
        assert!(matches!(result, Err(FramerError::EmptyDelimiter)));
    }

    #[test]
    fn test_delimiter_bytes() {
        let d = Delimiter::new(b"<beg>").unwrap();
        assert_eq!(d.as_bytes(), b"<beg>");
        assert_eq!(d.len(), 5);

        let d = Delimiter::from_byte(0x02);
        assert_eq!(d.as_bytes(), &[0x02]);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_pairing_count_mismatch() {
        let result = DelimiterPairing::new(delims(&[b"<beg>", b"<start>"]), delims(&[b"<end>"]));
        assert!(matches!(
            result,
            Err(FramerError::PairingMismatch { begins: 2, ends: 1 })
        ));
    }

    #[test]
    fn test_empty_pairing_rejected() {
        let result = DelimiterPairing::new(vec![], vec![]);
        assert!(matches!(result, Err(FramerError::EmptyPairing)));
    }

    #[test]
    fn test_ambiguous_begins_rejected() {
        // "<b" is a prefix of "<beg>"
        let result = DelimiterPairing::new(
            delims(&[b"<b", b"<beg>"]),
            delims(&[b"<end>", b"<end>"]),
        );
        assert!(matches!(
            result,
            Err(FramerError::AmbiguousDelimiters {
                shorter: 0,
                longer: 1
            })
        ));
    }

    #[test]
    fn test_duplicate_begins_rejected() {
        // Equal delimiters are prefixes of each other.
        let result = DelimiterPairing::new(
            delims(&[b"<beg>", b"<beg>"]),
            delims(&[b"<end>", b"<fin>"]),
        );
        assert!(matches!(
            result,
            Err(FramerError::AmbiguousDelimiters { .. })
        ));
    }

    #[test]
    fn test_duplicate_ends_allowed() {
        let pairing = DelimiterPairing::new(
            delims(&[b"<beg>", b"<start>"]),
            delims(&[b"<end>", b"<end>"]),
        )
        .unwrap();
        assert_eq!(pairing.len(), 2);
        assert_eq!(pairing.end(0).as_bytes(), pairing.end(1).as_bytes());
    }

    #[test]
    fn test_end_prefix_overlap_allowed() {
        // End matching is single-candidate, so overlapping ends are fine.
        let pairing = DelimiterPairing::new(
            delims(&[b"<beg>", b"<start>"]),
            delims(&[b"<e", b"<end>"]),
        )
        .unwrap();
        assert_eq!(pairing.len(), 2);
    }

    #[test]
    fn test_single_byte_pairing() {
        let pairing = DelimiterPairing::single_byte(b'{', b'}');
        assert_eq!(pairing.len(), 1);
        assert_eq!(pairing.begins()[0].as_bytes(), b"{");
        assert_eq!(pairing.end(0).as_bytes(), b"}");
    }
}
