//! Deterministic pseudo-random streams for seeded content generation.
//!
//! Every generated post owns one [`SeededStream`], constructed from the
//! post's seed and discarded when composition finishes. There is no shared
//! or global random state: two generations with different seeds can never
//! interfere, and replaying the same seed replays the exact draw sequence.
//!
//! ## Stability contract
//!
//! The whole reverse-lookup design rests on one invariant: for a fixed seed
//! and a fixed, ordered sequence of calls, the results are byte-for-byte
//! identical on every run, on every machine. Three choices pin this down:
//!
//! - The generator is PCG-32 (`rand_pcg::Pcg32`), whose output stream is a
//!   documented stability guarantee of the `rand_pcg` crate.
//! - Seeds expand through `SeedableRng::seed_from_u64`, whose SplitMix64
//!   expansion is likewise fixed by `rand_core`.
//! - Bounded draws and shuffles are implemented here, on top of the raw
//!   32-bit output, rather than through `rand`'s distribution machinery —
//!   distribution internals are allowed to change between `rand` releases,
//!   and this module is not.
//!
//! Changing any of the three silently orphans every slug and title recorded
//! under the old draw sequence. If that ever becomes necessary, bump
//! [`ALGORITHM_VERSION`] so downstream fixtures can detect the break.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Identity of the draw algorithm. Bump on any change to the generator,
/// the seed expansion, or the bounded-draw/shuffle mapping below.
pub const ALGORITHM_VERSION: u32 = 1;

/// A deterministic stream of bounded draws, private to one generation call.
#[derive(Debug)]
pub struct SeededStream {
    rng: Pcg32,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw an integer in `[low, high]`, inclusive on both ends.
    ///
    /// Maps one raw 32-bit output onto the range via widening multiply.
    /// Exactly one draw is consumed per call regardless of the bounds.
    pub fn next_int(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high, "inverted bounds: [{low}, {high}]");
        let range = u64::from(high) - u64::from(low) + 1;
        let raw = u64::from(self.rng.next_u32());
        low + ((raw * range) >> 32) as u32
    }

    /// Draw one element from a non-empty slice. Consumes one draw.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let index = self.next_int(0, items.len() as u32 - 1) as usize;
        &items[index]
    }

    /// Fair coin. Consumes one draw.
    pub fn coin_flip(&mut self) -> bool {
        self.next_int(0, 1) == 1
    }

    /// Shuffle a sequence in place with Fisher–Yates, walking high to low.
    ///
    /// Consumes exactly `len - 1` draws (zero for empty or single-element
    /// input). The draw count is part of the determinism contract: callers
    /// that shuffle then draw again depend on it.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}
