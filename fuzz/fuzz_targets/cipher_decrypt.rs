//! Decryption of arbitrary bytes under arbitrary seeds must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palaver_cipher::{EncodingPipeline, SystemClock};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let (head, ciphertext) = data.split_at(4);
    let seed = u32::from_le_bytes([head[0], head[1], head[2], head[3]]) % 1_000_000;
    let pipeline = EncodingPipeline::new(SystemClock);
    let _ = pipeline.decrypt(ciphertext, seed);
});
