//! Shared primitive types used across the roller.

/// Global orb identifier. Assigned in catalog load order, starting at 0.
pub type OrbId = usize;

/// A color category name, e.g. "blue".
pub type ColorName = String;

/// A seed for one deterministic stream.
pub type Seed = u64;

/// Upper bound (inclusive) for auto-generated master seeds.
pub const MAX_AUTO_SEED: Seed = 1_000_000;
