//! Key scheduling: seed derivation and substitution-table construction.
//!
//! A seed is a six-decimal-digit integer derived from the minute of day
//! through a fixed trigonometric expression. The substitution table is a
//! Fisher-Yates shuffle of the printable alphabet driven by a Mulberry32
//! generator seeded with that value, so table construction is a pure
//! function of the seed.

use crate::clock::Clock;
use crate::rng::Mulberry32;
use crate::substitute::{ALPHABET, ALPHABET_LEN, SubstitutionTable};

// The truncated digits are load-bearing: seed derivation and the byte mask
// depend on these exact literal values.
#[allow(clippy::approx_constant)]
pub(crate) const PI: f64 = 3.141_592_653_5;
#[allow(clippy::approx_constant)]
pub(crate) const E: f64 = 2.718_281_828_4;
pub(crate) const PHI: f64 = 1.618_033_988_7;

/// Ephemeral key material for one message.
///
/// Only `seed` is persisted; the table is rebuilt from it on demand.
#[derive(Debug, Clone)]
pub struct CipherKey {
    /// Bijection applied to printable characters before masking.
    pub table: SubstitutionTable,
    /// Seed parameterizing both the table shuffle and the byte mask.
    pub seed: u32,
}

impl CipherKey {
    /// Derives a fresh key from the clock's current minute.
    pub fn generate(clock: &impl Clock) -> Self {
        Self::from_seed(derive_seed(clock.minute_of_day()))
    }

    /// Rebuilds the key a given seed produces.
    pub fn from_seed(seed: u32) -> Self {
        Self { table: build_table(seed), seed }
    }
}

/// Derives the seed for a given minute of day.
///
/// The minute number is fed, as radians, through `sin(m) + cos(m)·PI`,
/// scaled by `E·PHI` and a factor of 10^6, floored, and reduced modulo
/// 10^6. The result is always below 1 000 000.
pub fn derive_seed(minute: u32) -> u32 {
    let m = f64::from(minute);
    let trig = m.sin() + m.cos() * PI;
    ((trig * E * PHI).abs() * 1e6).floor() as u32 % 1_000_000
}

/// Builds the substitution table a seed deterministically yields.
///
/// Fisher-Yates over the alphabet in code order: at each step the swap
/// index is `floor(next() * m)` with `m` the number of unshuffled
/// positions remaining. The original-order symbol at position `i` is
/// paired with the shuffled symbol at position `i`.
pub fn build_table(seed: u32) -> SubstitutionTable {
    let mut shuffled = ALPHABET;
    let mut rng = Mulberry32::new(seed);
    let mut m = ALPHABET_LEN;
    while m > 0 {
        let i = (rng.next_f64() * m as f64).floor() as usize;
        m -= 1;
        shuffled.swap(m, i);
    }
    SubstitutionTable::from_permutation(shuffled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_vectors_match_reference() {
        for (minute, seed) in [
            (0, 817_580),
            (1, 166_689),
            (2, 750_804),
            (617, 556_193),
            (618, 228_457),
            (720, 986_460),
            (1439, 320_980),
        ] {
            assert_eq!(derive_seed(minute), seed, "minute {minute}");
        }
    }

    #[test]
    fn seed_is_always_six_digits_or_fewer() {
        for minute in 0..1440 {
            assert!(derive_seed(minute) < 1_000_000);
        }
    }

    #[test]
    fn substitution_vector_matches_reference() {
        let table = build_table(617);
        assert_eq!(table.apply("Hello, Palaver!"), "yM__|*$\\u_uJMV%");
    }

    #[test]
    fn same_seed_builds_identical_tables() {
        assert_eq!(build_table(556_193), build_table(556_193));
    }

    #[test]
    fn key_from_seed_round_trips_text() {
        let key = CipherKey::from_seed(derive_seed(75));
        let text = "The quick brown fox jumps over the lazy dog";
        assert_eq!(key.table.invert(&key.table.apply(text)), text);
    }
}
