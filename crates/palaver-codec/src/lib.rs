//! Huffman compression for Palaver message bodies.
//!
//! Messages are compressed after encryption: each distinct character gets a
//! prefix-free bit code weighted by its frequency, and the coding tree is
//! persisted next to the bitstring so the reader can rebuild it. Tree shape
//! is deterministic for a given input (ties between equal-weight nodes are
//! broken by first-encountered-first-extracted order), so the same text
//! always produces the same bitstring.
//!
//! # Components
//!
//! - [`tree`]: The coding tree and its flat serializable [`TreeRecord`] form
//! - [`codec`]: Frequency counting, tree construction, compression and
//!   decompression
//! - [`error`]: Decode failure taxonomy

#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod tree;

pub use codec::{Compressed, build_tree, code_table, compress, decompress, frequency_table};
pub use error::CodecError;
pub use tree::{HuffmanNode, HuffmanTree, TreeRecord};
