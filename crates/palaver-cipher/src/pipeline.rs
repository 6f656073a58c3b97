//! The encoding pipeline: substitution plus masking.
//!
//! Outbound text is substituted through a freshly derived table and then
//! XOR-masked; the seed that produced both is returned alongside the
//! ciphertext and is the only key material a caller needs to persist.
//!
//! # Decode paths
//!
//! Historically the decoder rebuilt its substitution table from the
//! *current* minute, so a message only round-tripped if encode and decode
//! fell in the same minute quantum. Here the persisted seed is the source
//! of truth: [`EncodingPipeline::decrypt`] rebuilds the table from the seed
//! and old messages stay readable. The time-coupled behavior is kept,
//! unchanged, behind [`EncodingPipeline::decrypt_at`] for callers that need
//! it.

use crate::clock::Clock;
use crate::error::CipherError;
use crate::mask::apply_mask;
use crate::schedule::CipherKey;

/// Ciphertext plus the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Masked ciphertext bytes.
    pub ciphertext: Vec<u8>,
    /// Seed the table and mask were derived from. Persisted per message.
    pub seed: u32,
}

/// Composes the substitution cipher and the stream mask.
#[derive(Debug, Clone)]
pub struct EncodingPipeline<C> {
    clock: C,
}

impl<C: Clock> EncodingPipeline<C> {
    /// Creates a pipeline reading encode-time minutes from `clock`.
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Encrypts `plaintext` under a key derived from the current minute.
    pub fn encrypt(&self, plaintext: &str) -> Sealed {
        let key = CipherKey::generate(&self.clock);
        let substituted = key.table.apply(plaintext);
        let mut bytes = substituted.into_bytes();
        apply_mask(&mut bytes, key.seed);
        Sealed { ciphertext: bytes, seed: key.seed }
    }

    /// Decrypts `ciphertext` using the persisted seed as source of truth.
    ///
    /// The substitution table is rebuilt from `seed`, so this succeeds
    /// regardless of when the message was encoded.
    ///
    /// # Errors
    ///
    /// [`CipherError::KeyMismatch`] if unmasking does not yield valid
    /// UTF-8. A mismatched seed that happens to survive UTF-8 validation
    /// yields scrambled text, as it always did.
    pub fn decrypt(&self, ciphertext: &[u8], seed: u32) -> Result<String, CipherError> {
        let substituted = unmask(ciphertext, seed)?;
        Ok(CipherKey::from_seed(seed).table.invert(&substituted))
    }

    /// Decrypts with the table re-derived from the clock's current minute.
    ///
    /// This is the legacy time-coupled path: the mask still uses the
    /// supplied seed, but the substitution table comes from whatever minute
    /// the clock reports now. Output matches [`decrypt`](Self::decrypt)
    /// only while the clock sits in the same minute quantum the message
    /// was encoded in.
    pub fn decrypt_at(&self, ciphertext: &[u8], seed: u32) -> Result<String, CipherError> {
        let substituted = unmask(ciphertext, seed)?;
        Ok(CipherKey::generate(&self.clock).table.invert(&substituted))
    }
}

fn unmask(ciphertext: &[u8], seed: u32) -> Result<String, CipherError> {
    let mut bytes = ciphertext.to_vec();
    apply_mask(&mut bytes, seed);
    String::from_utf8(bytes).map_err(|_| CipherError::KeyMismatch)
}
