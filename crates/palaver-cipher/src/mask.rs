//! Byte-wise XOR masking keyed by a seed.

use crate::schedule::{E, PHI, PI};

/// XORs byte `i` with `floor(PI * E * PHI * seed * (i + 1)) mod 256`.
///
/// The mask depends only on seed and position, so applying it twice is the
/// identity. Multiplication order matters for the floor results and must
/// not be rearranged.
pub fn apply_mask(bytes: &mut [u8], seed: u32) {
    let keyed = PI * E * PHI * f64::from(seed);
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte ^= (keyed * (i as f64 + 1.0)).floor() as u64 as u8;
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::proptest;

    use super::*;

    #[test]
    fn mask_vector_matches_reference() {
        let mut bytes = *b"abc";
        apply_mask(&mut bytes, 123_456);
        assert_eq!(bytes, [0xE6, 0x6C, 0xF6]);
    }

    #[test]
    fn masking_twice_is_identity() {
        let original = b"palaver mask involution".to_vec();
        let mut bytes = original.clone();
        apply_mask(&mut bytes, 42);
        assert_ne!(bytes, original);
        apply_mask(&mut bytes, 42);
        assert_eq!(bytes, original);
    }

    #[test]
    fn zero_seed_masks_to_zero() {
        let mut bytes = *b"xyz";
        apply_mask(&mut bytes, 0);
        assert_eq!(bytes, *b"xyz");
    }

    proptest! {
        #[test]
        fn involution_holds_for_any_input(data: Vec<u8>, seed in 0u32..1_000_000) {
            let mut bytes = data.clone();
            apply_mask(&mut bytes, seed);
            apply_mask(&mut bytes, seed);
            assert_eq!(bytes, data);
        }
    }
}
