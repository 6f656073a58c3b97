//! Palaver message content pipeline.
//!
//! Composes the three content stages every message travels through:
//!
//! ```text
//! outbound:  text ──analyze──> filtered text ──encrypt──> bytes ──compress──> record
//! inbound:   record ──decompress──> bytes ──decrypt──> text
//! ```
//!
//! The surrounding transport, storage and UI layers are collaborators:
//! this crate takes a message string in and hands back a
//! [`MessageRecord`], the exact set of fields the store round-trips per
//! message.
//!
//! All operations are synchronous and CPU-bound. Independent messages may
//! be processed concurrently; lexicon mutation through
//! [`MessagePipeline::engine_mut`] must be serialized by the caller.

#![forbid(unsafe_code)]

pub mod error;
pub mod pipeline;
pub mod record;

pub use error::PipelineError;
pub use pipeline::{MessagePipeline, SealedMessage};
pub use record::MessageRecord;

pub use palaver_cipher::{Clock, SystemClock};
pub use palaver_lexicon::{LexiconConfig, MessageAnalysis, WordProtectionEngine};
