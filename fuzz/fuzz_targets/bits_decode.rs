//! Compression round-trip must hold for arbitrary text and never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use palaver_codec::{compress, decompress};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    if text.is_empty() {
        return;
    }
    let Ok(compressed) = compress(&text) else {
        return;
    };
    let decoded = decompress(&compressed.bits, &compressed.tree).expect("round trip decodes");
    assert_eq!(decoded, text);
});
