//! Deterministic weighted-lottery roller.
//!
//! A master seed derives one stream seed for color rolls and one per
//! color for orb rolls. Every roll re-creates its stream from its seed,
//! so rolling more never changes what was already rolled.

pub mod catalog;
pub mod color_roller;
pub mod config;
pub mod context;
pub mod error;
pub mod orb_roller;
pub mod report;
pub mod rng;
pub mod roll;
pub mod sampler;
pub mod seed;
pub mod types;

pub use catalog::{Catalog, Orb};
pub use config::{ColorConfig, RollerConfig};
pub use context::SimulationContext;
pub use error::{SimError, SimResult};
pub use roll::{ColorOrbRoll, OrbRequest, OrbRolls, RollResult};
pub use seed::SeedState;
