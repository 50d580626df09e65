//! Seeded pseudo-random source for layout generation.
//!
//! A small linear congruential generator: the whole output sequence is a
//! function of the seed, so a layout generated from the same inputs is
//! bit-identical across runs and platforms.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49_297;
/// Period of the generator; seeds are reduced modulo this value.
pub const MODULUS: u64 = 233_280;

/// Deterministic generator: `s = (s * 9301 + 49297) mod 233280`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Next value in `[0, 1)`.
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f32 / MODULUS as f32
    }

    /// Next index in `0..bound`. `bound` must be non-zero.
    #[inline]
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index called with an empty range");
        let idx = (self.next_f32() * bound as f32) as usize;
        idx.min(bound.saturating_sub(1))
    }

    /// Uniform pick from a non-empty slice.
    #[inline]
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.next_index(items.len())]
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

static FRESH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A seed that is not reproducible across calls (used by Shuffle).
///
/// Mixes the wall clock with a process-wide counter so two shuffles inside
/// the same clock tick still differ.
pub fn fresh_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let bump = FRESH_COUNTER.fetch_add(1, Ordering::Relaxed);
    // splitmix64 finaliser so consecutive counters land far apart mod MODULUS
    let mut z = nanos ^ bump.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
