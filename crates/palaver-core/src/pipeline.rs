//! Outbound sealing and inbound opening of message bodies.

use palaver_cipher::{Clock, EncodingPipeline};
use palaver_codec::{HuffmanTree, compress, decompress};
use palaver_lexicon::{LexiconConfig, MessageAnalysis, WordProtectionEngine};

use crate::error::PipelineError;
use crate::record::MessageRecord;

/// Result of sealing one outbound message.
#[derive(Debug, Clone)]
pub struct SealedMessage {
    /// Moderation outcome for the input text.
    pub analysis: MessageAnalysis,
    /// Fields to hand to the storage collaborator.
    pub record: MessageRecord,
}

/// The full content pipeline for one chat process.
///
/// Construct once at startup with the process word lists; the engine's
/// lexicons afterwards change only through [`engine_mut`](Self::engine_mut).
#[derive(Debug, Clone)]
pub struct MessagePipeline<C> {
    engine: WordProtectionEngine,
    cipher: EncodingPipeline<C>,
}

impl<C: Clock> MessagePipeline<C> {
    /// Creates a pipeline with lexicons loaded from `config`.
    pub fn new(clock: C, config: &LexiconConfig) -> Self {
        Self {
            engine: WordProtectionEngine::with_config(config),
            cipher: EncodingPipeline::new(clock),
        }
    }

    /// Read access to the moderation engine.
    pub fn engine(&self) -> &WordProtectionEngine {
        &self.engine
    }

    /// Mutable access to the moderation engine for the admin surface.
    ///
    /// Mutation must be serialized by the caller; concurrent reads are
    /// safe only against an engine that is not being mutated.
    pub fn engine_mut(&mut self) -> &mut WordProtectionEngine {
        &mut self.engine
    }

    /// Seals an outbound message: analyze, filter, encrypt, compress.
    ///
    /// The body persisted is the *filtered* message (what the engine
    /// decided readers should see), never the raw input.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Validation`] for empty or whitespace-only input;
    /// codec failures cannot occur on the encode path for non-empty text.
    pub fn seal(&self, text: &str) -> Result<SealedMessage, PipelineError> {
        let analysis = self.engine.analyze_message(text)?;
        let sealed = self.cipher.encrypt(&analysis.filtered_message);
        let compressed = compress(&chars_from_bytes(&sealed.ciphertext))?;

        tracing::debug!(
            seed = sealed.seed,
            ciphertext_len = sealed.ciphertext.len(),
            bits = compressed.bits.len(),
            is_clean = analysis.is_clean,
            "message sealed"
        );

        Ok(SealedMessage {
            analysis,
            record: MessageRecord {
                seed: sealed.seed,
                bits: compressed.bits,
                tree: compressed.tree.to_record(),
                audit_plaintext: None,
                attachment: None,
            },
        })
    }

    /// [`seal`](Self::seal), additionally keeping the filtered plaintext
    /// in the record for audit.
    pub fn seal_with_audit(&self, text: &str) -> Result<SealedMessage, PipelineError> {
        let mut sealed = self.seal(text)?;
        sealed.record.audit_plaintext = Some(sealed.analysis.filtered_message.clone());
        Ok(sealed)
    }

    /// Opens a stored message: decompress, then decrypt under the
    /// record's seed.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Codec`] if the tree or bitstring is corrupt
    /// - [`PipelineError::NonByteSymbol`] if the decoded symbols cannot
    ///   be ciphertext bytes
    /// - [`PipelineError::Cipher`] if the seed does not fit the
    ///   ciphertext
    pub fn open(&self, record: &MessageRecord) -> Result<String, PipelineError> {
        let tree = HuffmanTree::from_record(&record.tree)?;
        let ciphertext = bytes_from_chars(&decompress(&record.bits, &tree)?)?;
        let text = self.cipher.decrypt(&ciphertext, record.seed)?;

        tracing::debug!(seed = record.seed, len = text.len(), "message opened");
        Ok(text)
    }
}

/// Widens ciphertext bytes into the char-per-byte form the codec
/// compresses. Byte `b` becomes `U+00{b}`, so the mapping is lossless and
/// order-preserving.
fn chars_from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Reverses [`chars_from_bytes`].
fn bytes_from_chars(text: &str) -> Result<Vec<u8>, PipelineError> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| PipelineError::NonByteSymbol))
        .collect()
}
