//! Error types for the cipher pipeline.

use thiserror::Error;

/// Errors produced by the encoding pipeline.
///
/// Decryption failures are surfaced as typed errors rather than substituted
/// with a sentinel string; callers decide how to present them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// Unmasking did not yield valid UTF-8. The supplied seed does not match
    /// the key the ciphertext was produced under.
    #[error("unmasked bytes are not valid UTF-8; seed does not match the encoding key")]
    KeyMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mismatch_display() {
        assert_eq!(
            CipherError::KeyMismatch.to_string(),
            "unmasked bytes are not valid UTF-8; seed does not match the encoding key"
        );
    }
}
