//! The persisted per-message record.

use bytes::Bytes;
use palaver_codec::TreeRecord;
use serde::{Deserialize, Serialize};

/// Fields the storage collaborator round-trips for one message.
///
/// The seed, bitstring and tree are everything needed to recover the
/// message body. The audit plaintext and attachment blob ride along
/// opaquely; this crate neither reads nor interprets them beyond
/// carrying them through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Cipher seed the message body was sealed under.
    pub seed: u32,
    /// Huffman-compressed ciphertext, one `0`/`1` character per bit.
    pub bits: String,
    /// Serialized coding tree for `bits`.
    pub tree: TreeRecord,
    /// Optional readable copy kept for audit; the filtered message, not
    /// the raw input.
    pub audit_plaintext: Option<String>,
    /// Opaque attachment metadata, untouched by the pipeline.
    pub attachment: Option<Bytes>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MessageRecord {
        let compressed = palaver_codec::compress("sample body").unwrap();
        MessageRecord {
            seed: 556_193,
            bits: compressed.bits,
            tree: compressed.tree.to_record(),
            audit_plaintext: Some("sample body".to_owned()),
            attachment: Some(Bytes::from_static(b"\x00\x01\x02")),
        }
    }

    #[test]
    fn record_survives_cbor() {
        let record = sample();
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&record, &mut buffer).unwrap();
        let decoded: MessageRecord = ciborium::de::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let record = MessageRecord { audit_plaintext: None, attachment: None, ..sample() };
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&record, &mut buffer).unwrap();
        let decoded: MessageRecord = ciborium::de::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(decoded, record);
    }
}
