//! Frequency counting, tree construction, compression, decompression.

use std::collections::HashMap;

use crate::error::CodecError;
use crate::tree::{HuffmanNode, HuffmanTree};

/// A compressed message body: the bitstring and the tree that decodes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Concatenated per-character codes, one `0`/`1` character per bit.
    pub bits: String,
    /// The coding tree; persist its record form next to the bits.
    pub tree: HuffmanTree,
}

/// Counts symbol occurrences, in first-appearance order.
///
/// Order is semantic: it fixes which of two equal-weight nodes is extracted
/// first during tree construction, and therefore the exact tree shape.
pub fn frequency_table(text: &str) -> Vec<(char, u64)> {
    let mut positions: HashMap<char, usize> = HashMap::new();
    let mut table: Vec<(char, u64)> = Vec::new();
    for c in text.chars() {
        if let Some(&at) = positions.get(&c) {
            table[at].1 += 1;
        } else {
            positions.insert(c, table.len());
            table.push((c, 1));
        }
    }
    table
}

/// Builds the coding tree for a frequency table.
///
/// Repeatedly extracts the two lowest-weight nodes from a stable
/// weight-sorted working list, merges them (first extracted becomes the
/// left child), appends the merged node at the back, and re-sorts. The
/// append-then-stable-sort places a merged node after every node of equal
/// weight, which is the tie-break the persisted bitstrings were produced
/// under; keep it.
///
/// # Errors
///
/// [`CodecError::EmptyInput`] if the table is empty.
pub fn build_tree(table: &[(char, u64)]) -> Result<HuffmanTree, CodecError> {
    let mut nodes: Vec<HuffmanNode> =
        table.iter().map(|&(symbol, weight)| HuffmanNode::Leaf { symbol, weight }).collect();
    nodes.sort_by_key(HuffmanNode::weight);

    while nodes.len() > 1 {
        let left = nodes.remove(0);
        let right = nodes.remove(0);
        let weight = left.weight() + right.weight();
        nodes.push(HuffmanNode::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        });
        nodes.sort_by_key(HuffmanNode::weight);
    }

    match nodes.pop() {
        Some(root) => Ok(HuffmanTree::new(root)),
        None => Err(CodecError::EmptyInput),
    }
}

/// Assigns each symbol its bit code: left edges append `0`, right edges
/// append `1`. A tree with a single leaf has no branching; its symbol gets
/// the one-bit code `0`.
pub fn code_table(tree: &HuffmanTree) -> HashMap<char, String> {
    let mut codes = HashMap::new();
    match tree.root() {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, "0".to_owned());
        }
        root => collect_codes(root, String::new(), &mut codes),
    }
    codes
}

fn collect_codes(node: &HuffmanNode, prefix: String, codes: &mut HashMap<char, String>) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        HuffmanNode::Internal { left, right, .. } => {
            collect_codes(left, format!("{prefix}0"), codes);
            collect_codes(right, format!("{prefix}1"), codes);
        }
    }
}

/// Compresses `text` into a bitstring plus its coding tree.
///
/// # Errors
///
/// [`CodecError::EmptyInput`] for an empty `text`.
pub fn compress(text: &str) -> Result<Compressed, CodecError> {
    let tree = build_tree(&frequency_table(text))?;
    let codes = code_table(&tree);

    let mut bits = String::new();
    for c in text.chars() {
        // Every character of `text` is in the table by construction.
        if let Some(code) = codes.get(&c) {
            bits.push_str(code);
        }
    }
    Ok(Compressed { bits, tree })
}

/// Decodes a bitstring against its coding tree.
///
/// Walks from the root per bit, emitting a symbol and resetting whenever a
/// leaf is reached. A single-leaf tree emits its symbol once per bit.
///
/// # Errors
///
/// - [`CodecError::InvalidBit`] for characters other than `0`/`1`
/// - [`CodecError::TruncatedBits`] if the input ends mid-code
pub fn decompress(bits: &str, tree: &HuffmanTree) -> Result<String, CodecError> {
    let mut text = String::new();
    let mut node = tree.root();
    for bit in bits.chars() {
        node = match (bit, node) {
            ('0', HuffmanNode::Internal { left, .. }) => left.as_ref(),
            ('1', HuffmanNode::Internal { right, .. }) => right.as_ref(),
            ('0' | '1', HuffmanNode::Leaf { .. }) => node,
            (other, _) => return Err(CodecError::InvalidBit(other)),
        };
        if let HuffmanNode::Leaf { symbol, .. } = node {
            text.push(*symbol);
            node = tree.root();
        }
    }
    if std::ptr::eq(node, tree.root()) {
        Ok(text)
    } else {
        Err(CodecError::TruncatedBits)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::proptest;

    use super::*;
    use crate::tree::HuffmanTree;

    #[test]
    fn frequency_table_keeps_first_appearance_order() {
        assert_eq!(
            frequency_table("abracadabra"),
            vec![('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)]
        );
    }

    #[test]
    fn known_codes_for_abracadabra() {
        let tree = build_tree(&frequency_table("abracadabra")).unwrap();
        let codes = code_table(&tree);
        assert_eq!(codes[&'a'], "0");
        assert_eq!(codes[&'b'], "110");
        assert_eq!(codes[&'c'], "100");
        assert_eq!(codes[&'d'], "101");
        assert_eq!(codes[&'r'], "111");
    }

    #[test]
    fn bitstring_vectors_match_reference() {
        assert_eq!(compress("abracadabra").unwrap().bits, "01101110100010101101110");
        assert_eq!(compress("hello world").unwrap().bits, "11101111101011000000111001010011");
        assert_eq!(
            compress("mississippi river").unwrap().bits,
            "1000110000110000110100101110010111110101011011"
        );
    }

    #[test]
    fn decompress_reverses_compress() {
        for text in ["abracadabra", "hello world", "mississippi river", "a b"] {
            let compressed = compress(text).unwrap();
            assert_eq!(decompress(&compressed.bits, &compressed.tree).unwrap(), text);
        }
    }

    #[test]
    fn single_distinct_symbol_uses_one_bit_codes() {
        let compressed = compress("aaaa").unwrap();
        assert_eq!(compressed.bits, "0000");
        assert_eq!(decompress(&compressed.bits, &compressed.tree).unwrap(), "aaaa");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(compress("").map(|c| c.bits), Err(CodecError::EmptyInput));
        assert_eq!(build_tree(&[]).err(), Some(CodecError::EmptyInput));
    }

    #[test]
    fn truncated_bitstring_is_a_decode_error() {
        let compressed = compress("hello world").unwrap();
        let truncated = &compressed.bits[..compressed.bits.len() - 1];
        assert_eq!(decompress(truncated, &compressed.tree), Err(CodecError::TruncatedBits));
    }

    #[test]
    fn non_bit_characters_are_rejected() {
        let compressed = compress("ab").unwrap();
        assert_eq!(decompress("01x", &compressed.tree), Err(CodecError::InvalidBit('x')));
    }

    #[test]
    fn decoding_with_a_rebuilt_tree_matches() {
        let compressed = compress("buy cheap stuff now").unwrap();
        let rebuilt = HuffmanTree::from_record(&compressed.tree.to_record()).unwrap();
        assert_eq!(decompress(&compressed.bits, &rebuilt).unwrap(), "buy cheap stuff now");
    }

    proptest! {
        #[test]
        fn round_trip_for_any_non_empty_text(text in ".{1,200}") {
            let compressed = compress(&text).unwrap();
            assert_eq!(decompress(&compressed.bits, &compressed.tree).unwrap(), text);
        }
    }
}
