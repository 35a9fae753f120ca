//! Deterministic per-start-city and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Every start city gets its own independent `SmallRng` seeded by:
//!
//!   seed = base_seed XOR (city_index * MIXING_CONSTANT)
//!
//! where `base_seed` is drawn once per search from the run's [`SearchRng`].
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive city indices uniformly across the seed space.
//! This means:
//!
//! - Start cities never share RNG state (no contention, no ordering
//!   dependency), so the walks drawn for a city are the same whether the
//!   search runs on one thread or many.
//! - All RNG calls are local to the owning worker; no synchronisation needed.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::CityId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── WalkRng ───────────────────────────────────────────────────────────────────

/// Random source for the walks drawn from one start city.
///
/// Each Rayon task owns the `WalkRng` of the start city it is sampling.
pub struct WalkRng(SmallRng);

impl WalkRng {
    /// Seed deterministically from a base seed and the start city.
    pub fn new(base_seed: u64, start: CityId) -> Self {
        let seed = base_seed ^ (start.0 as u64).wrapping_mul(MIXING_CONSTANT);
        WalkRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, bypassing the per-city mixing.  Handy for drawing a
    /// single reproducible walk.
    pub fn from_seed(seed: u64) -> Self {
        WalkRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

// ── SearchRng ─────────────────────────────────────────────────────────────────

/// Run-level RNG.  One per search request, owned by the caller.
///
/// Used only on the calling thread.  Per-start randomness is derived from it
/// through [`next_base_seed`](Self::next_base_seed) and [`WalkRng::new`].
pub struct SearchRng(SmallRng);

impl SearchRng {
    pub fn new(seed: u64) -> Self {
        SearchRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw the base seed that all of one search's [`WalkRng`]s derive from.
    #[inline]
    pub fn next_base_seed(&mut self) -> u64 {
        self.0.r#gen()
    }
}
