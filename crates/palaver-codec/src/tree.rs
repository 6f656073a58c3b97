//! The Huffman coding tree and its serializable form.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// A node of a Huffman coding tree.
///
/// Leaves carry exactly one symbol; internal nodes always have exactly two
/// children and own them. Weights are the summed frequencies of the
/// subtree's symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// Terminal node holding one symbol.
    Leaf {
        /// The encoded symbol.
        symbol: char,
        /// Occurrence count of the symbol in the source text.
        weight: u64,
    },
    /// Branch node merging two subtrees.
    Internal {
        /// Sum of both children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffmanNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// The node's weight.
    pub fn weight(&self) -> u64 {
        match self {
            Self::Leaf { weight, .. } | Self::Internal { weight, .. } => *weight,
        }
    }
}

/// An owned Huffman coding tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffmanNode,
}

impl HuffmanTree {
    pub(crate) fn new(root: HuffmanNode) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &HuffmanNode {
        &self.root
    }

    /// Flattens the tree into its serializable record form.
    pub fn to_record(&self) -> TreeRecord {
        record_node(&self.root)
    }

    /// Rebuilds a tree from its record form.
    ///
    /// # Errors
    ///
    /// [`CodecError::MalformedTree`] if any record node is neither a leaf
    /// (symbol, no children) nor an internal node (no symbol, both
    /// children).
    pub fn from_record(record: &TreeRecord) -> Result<Self, CodecError> {
        Ok(Self { root: node_from_record(record)? })
    }
}

/// Flat serializable form of a Huffman tree, persisted per message.
///
/// Leaves carry `symbol` and no children; internal nodes carry both
/// children and no symbol. Weights ride along so a stored record can be
/// re-inspected, though decoding needs only shape and symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    /// Symbol, for leaf records.
    pub symbol: Option<char>,
    /// Subtree weight.
    pub weight: u64,
    /// Left child, for internal records.
    pub left: Option<Box<TreeRecord>>,
    /// Right child, for internal records.
    pub right: Option<Box<TreeRecord>>,
}

fn record_node(node: &HuffmanNode) -> TreeRecord {
    match node {
        HuffmanNode::Leaf { symbol, weight } => {
            TreeRecord { symbol: Some(*symbol), weight: *weight, left: None, right: None }
        }
        HuffmanNode::Internal { weight, left, right } => TreeRecord {
            symbol: None,
            weight: *weight,
            left: Some(Box::new(record_node(left))),
            right: Some(Box::new(record_node(right))),
        },
    }
}

fn node_from_record(record: &TreeRecord) -> Result<HuffmanNode, CodecError> {
    match (record.symbol, &record.left, &record.right) {
        (Some(symbol), None, None) => Ok(HuffmanNode::Leaf { symbol, weight: record.weight }),
        (None, Some(left), Some(right)) => Ok(HuffmanNode::Internal {
            weight: record.weight,
            left: Box::new(node_from_record(left)?),
            right: Box::new(node_from_record(right)?),
        }),
        _ => Err(CodecError::MalformedTree),
    }
}
