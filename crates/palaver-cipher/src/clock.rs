//! Time source abstraction.
//!
//! Key derivation is coupled to the wall clock, so the clock is supplied
//! explicitly rather than read ambiently. Production uses [`SystemClock`];
//! tests pin the minute with a fixed implementation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the minute-of-day used for key derivation.
pub trait Clock {
    /// Minutes elapsed since midnight, in `0..1440`.
    fn minute_of_day(&self) -> u32;
}

/// Clock backed by the system clock.
///
/// Minutes are taken from UTC. Derivation only needs a stable minute
/// quantum shared by whoever encodes and decodes within it, not a
/// particular civil timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn minute_of_day(&self) -> u32 {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        ((secs / 60) % (24 * 60)) as u32
    }
}
