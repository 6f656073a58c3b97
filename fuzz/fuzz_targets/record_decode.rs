//! Opening a hostile stored record must fail cleanly, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palaver_core::{LexiconConfig, MessagePipeline, MessageRecord, SystemClock};

fuzz_target!(|data: &[u8]| {
    let Ok(record) = ciborium::de::from_reader::<MessageRecord, _>(data) else {
        return;
    };
    let pipeline = MessagePipeline::new(SystemClock, &LexiconConfig::default());
    let _ = pipeline.open(&record);
});
