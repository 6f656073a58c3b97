//! Trie-backed content moderation for Palaver messages.
//!
//! A generic prefix tree ([`Trie`]) underpins four independent lexicons
//! (banned words, spam patterns, a shared dictionary, and per-user words)
//! owned by the [`WordProtectionEngine`]. The engine analyzes every
//! outgoing message: banned tokens are filtered, spam substrings reported,
//! and unrecognized words spell-checked against the dictionary by edit
//! distance.
//!
//! # Concurrency
//!
//! All operations are synchronous and in-memory. Reads (search,
//! suggestions, analysis) may run concurrently; mutation (insert, delete,
//! user-word additions) must be serialized by the caller: wrap the admin
//! surface behind a mutex or a single-threaded command queue. The data
//! structure itself takes `&mut self` for mutation and enforces nothing
//! further.
//!
//! # Components
//!
//! - [`trie`]: The mutable prefix tree
//! - [`distance`]: Levenshtein edit distance
//! - [`engine`]: The four-lexicon analysis engine
//! - [`error`]: Input validation failures

#![forbid(unsafe_code)]

pub mod distance;
pub mod engine;
pub mod error;
pub mod trie;

pub use distance::levenshtein;
pub use engine::{
    BannedWordHit, LexiconConfig, LexiconStats, MessageAnalysis, SpamMatch, SpellCheck,
    SpellingIssue, SpellingSuggestion, TrieKind, WordMeta, WordProtectionEngine,
};
pub use error::ValidationError;
pub use trie::{Hit, Suggestion, Trie};
