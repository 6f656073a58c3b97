//! Deterministic obfuscation cipher for Palaver message content.
//!
//! Every outgoing message passes through a two-stage reversible transform: a
//! character substitution over the 95 printable ASCII symbols, followed by a
//! byte-wise XOR mask. Both stages are keyed by a single 32-bit seed derived
//! from the minute of day, and the seed is the only key material persisted
//! per message.
//!
//! This is an obfuscation scheme, not cryptography. The substitution table is
//! reproducible by anyone holding the seed, and the mask is a fixed function
//! of the seed and byte position. It exists to keep stored message bodies
//! from being trivially readable, nothing more.
//!
//! # Components
//!
//! - [`clock`]: Injectable time source (pin it in tests)
//! - [`schedule`]: Seed derivation and substitution-table construction
//! - [`substitute`]: The printable-ASCII bijection
//! - [`mask`]: Involutive XOR byte mask
//! - [`pipeline`]: [`EncodingPipeline`] composing the stages into
//!   `encrypt`/`decrypt`

#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod mask;
pub mod pipeline;
mod rng;
pub mod schedule;
pub mod substitute;

pub use clock::{Clock, SystemClock};
pub use error::CipherError;
pub use mask::apply_mask;
pub use pipeline::{EncodingPipeline, Sealed};
pub use schedule::{CipherKey, build_table, derive_seed};
pub use substitute::SubstitutionTable;
