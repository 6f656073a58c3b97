//! Message round-trip tests
//!
//! Drives the full content path: seal an outbound message into the
//! persisted record, round-trip the record through its storage encoding,
//! and open it back into readable text.

use bytes::Bytes;
use palaver_codec::CodecError;
use palaver_core::{Clock, LexiconConfig, MessagePipeline, MessageRecord, PipelineError};
use proptest::{prelude::proptest, prop_assume};

/// Clock pinned to a fixed minute.
#[derive(Clone, Copy)]
struct FixedClock(u32);

impl Clock for FixedClock {
    fn minute_of_day(&self) -> u32 {
        self.0
    }
}

fn pipeline_at(minute: u32) -> MessagePipeline<FixedClock> {
    MessagePipeline::new(
        FixedClock(minute),
        &LexiconConfig {
            banned_words: vec!["viagra".into()],
            banned_replacement: "***".into(),
            spam_patterns: vec!["free money".into()],
            dictionary_words: vec!["buy".into(), "cheap".into(), "now".into(), "hello".into()],
        },
    )
}

#[test]
fn clean_message_round_trips_verbatim() {
    let pipeline = pipeline_at(617);
    let sealed = pipeline.seal("hello now").unwrap();

    assert!(sealed.analysis.is_clean);
    assert_eq!(pipeline.open(&sealed.record).unwrap(), "hello now");
}

#[test]
fn banned_message_is_stored_filtered() {
    let pipeline = pipeline_at(617);
    let sealed = pipeline.seal("buy cheap viagra now").unwrap();

    assert!(!sealed.analysis.is_clean);
    assert_eq!(sealed.analysis.filtered_message, "buy cheap *** now");
    // The raw input is gone; only the filtered body is recoverable.
    assert_eq!(pipeline.open(&sealed.record).unwrap(), "buy cheap *** now");
}

#[test]
fn opening_works_long_after_sealing() {
    let sealed = pipeline_at(617).seal("hello now").unwrap();

    // A process started in a different minute reads the same record.
    let reader = pipeline_at(1133);
    assert_eq!(reader.open(&sealed.record).unwrap(), "hello now");
}

#[test]
fn record_survives_its_storage_encoding() {
    let pipeline = pipeline_at(75);
    let mut sealed = pipeline.seal_with_audit("hello cheap now").unwrap();
    sealed.record.attachment = Some(Bytes::from_static(b"thumb.png\x00\x01"));

    let mut buffer = Vec::new();
    ciborium::ser::into_writer(&sealed.record, &mut buffer).unwrap();
    let stored: MessageRecord = ciborium::de::from_reader(buffer.as_slice()).unwrap();

    assert_eq!(stored, sealed.record);
    assert_eq!(stored.audit_plaintext.as_deref(), Some("hello cheap now"));
    assert_eq!(pipeline.open(&stored).unwrap(), "hello cheap now");
}

#[test]
fn blank_input_is_rejected_before_encoding() {
    let outcome = pipeline_at(617).seal("   ");
    assert!(matches!(outcome, Err(PipelineError::Validation(_))));
}

#[test]
fn corrupt_bits_fail_loudly() {
    let pipeline = pipeline_at(617);
    let mut sealed = pipeline.seal("hello now").unwrap();
    sealed.record.bits.pop();
    sealed.record.bits.push('x');

    assert_eq!(
        pipeline.open(&sealed.record),
        Err(PipelineError::Codec(CodecError::InvalidBit('x')))
    );
}

#[test]
fn wrong_seed_never_yields_the_original_text() {
    let pipeline = pipeline_at(617);
    let mut sealed = pipeline.seal("hello now").unwrap();
    sealed.record.seed = sealed.record.seed.wrapping_add(1) % 1_000_000;

    match pipeline.open(&sealed.record) {
        Ok(text) => assert_ne!(text, "hello now"),
        Err(error) => assert!(matches!(error, PipelineError::Cipher(_))),
    }
}

proptest! {
    #[test]
    fn any_printable_message_round_trips(text in "[ -~]{1,120}") {
        prop_assume!(!text.trim().is_empty());
        let pipeline = pipeline_at(300);
        let sealed = pipeline.seal(&text).unwrap();
        let opened = pipeline.open(&sealed.record).unwrap();
        // The stored body is always the analysis' filtered message; for
        // clean input that is the input itself.
        assert_eq!(opened, sealed.analysis.filtered_message);
    }
}
