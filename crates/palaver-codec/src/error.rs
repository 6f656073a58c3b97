//! Error types for the Huffman codec.

use thiserror::Error;

/// Errors produced while building trees or decoding bitstrings.
///
/// Decoding fails loudly: a bitstring that does not resolve cleanly against
/// its tree is corrupt, and emitting partial output would hand the caller
/// silently wrong text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// No symbols to build a tree from.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// The bitstring contains a character other than `0` or `1`.
    #[error("bitstring contains {0:?}, expected '0' or '1'")]
    InvalidBit(char),

    /// The bitstring ended in the middle of a code.
    #[error("bitstring ended in the middle of a code")]
    TruncatedBits,

    /// A serialized tree record violates the two-children invariant.
    #[error("serialized tree record is malformed")]
    MalformedTree,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bit_names_the_offender() {
        assert_eq!(
            CodecError::InvalidBit('x').to_string(),
            "bitstring contains 'x', expected '0' or '1'"
        );
    }
}
