//! Deterministic random number generation.
//!
//! RULE: Nothing in the roller may call any platform RNG, with one
//! exception: picking a master seed when the caller supplies none
//! (see `seed.rs`). Every other draw flows through a `RollRng`
//! created from a derived seed.
//!
//! A `RollRng` is re-created from its seed at the start of every roll
//! call and never reused across calls. That is what makes a longer
//! roll reproduce the shorter one as its prefix.

use crate::types::Seed;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// A named, deterministic stream for one roll.
pub struct RollRng {
    pub name: String,
    inner:    Pcg64Mcg,
}

impl RollRng {
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            name: "unnamed".to_string(),
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Access for `rand` distributions. Each distribution sample
    /// advances the stream exactly like `next_u64`.
    pub(crate) fn inner_mut(&mut self) -> &mut Pcg64Mcg {
        &mut self.inner
    }
}
