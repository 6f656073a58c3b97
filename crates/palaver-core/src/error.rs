//! Pipeline error composition.

use thiserror::Error;

/// Failures surfaced by the message pipeline.
///
/// Leaf failures pass through unchanged so callers can match on the
/// concrete stage that rejected a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Rejected input (empty message or word).
    #[error(transparent)]
    Validation(#[from] palaver_lexicon::ValidationError),

    /// Decryption failure (seed does not match the ciphertext).
    #[error(transparent)]
    Cipher(#[from] palaver_cipher::CipherError),

    /// Compression or decompression failure (corrupt bits or tree).
    #[error(transparent)]
    Codec(#[from] palaver_codec::CodecError),

    /// A stored tree decodes to a symbol outside the byte range, so the
    /// bitstring cannot be the compression of a ciphertext.
    #[error("compressed payload decodes to a non-byte symbol")]
    NonByteSymbol,
}
