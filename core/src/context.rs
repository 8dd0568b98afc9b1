//! The simulation context: configuration, catalog and seeds in one
//! caller-owned value.
//!
//! LIFECYCLE:
//!   1. `initialize()` loads the catalog. It is read-only afterwards.
//!   2. `reseed()` derives every stream seed from a master seed.
//!   3. `roll_colors()` / `roll_orbs()` are pure functions of the
//!      context until the next `reseed()`.
//!
//! Rolling before the first `reseed()` fails with `NotSeeded`; the
//! context never picks a seed implicitly.

use crate::{
    catalog::{Catalog, Orb},
    color_roller,
    config::RollerConfig,
    error::{SimError, SimResult},
    orb_roller,
    roll::{OrbRequest, OrbRolls, RollResult},
    seed::SeedState,
    types::{ColorName, OrbId, Seed},
};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct SimulationContext {
    config:  RollerConfig,
    catalog: Catalog,
    seeds:   Option<SeedState>,
}

impl SimulationContext {
    /// Validate `config` and load every configured orb list from
    /// `data_dir`.
    pub fn initialize(config: RollerConfig, data_dir: impl AsRef<Path>) -> SimResult<Self> {
        config.validate()?;
        let catalog = Catalog::load(&config, data_dir)?;
        Self::from_parts(config, catalog)
    }

    /// Build from an already loaded catalog.
    pub fn from_parts(config: RollerConfig, catalog: Catalog) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            catalog,
            seeds: None,
        })
    }

    /// Test colors and in-memory test catalog, seeded with `seed`.
    /// Used by tests and tooling.
    pub fn build_test(seed: Seed) -> SimResult<Self> {
        let mut ctx = Self::from_parts(RollerConfig::default_test(), Catalog::default_test()?)?;
        ctx.reseed(Some(seed));
        Ok(ctx)
    }

    /// Derive all stream seeds. With `None` a master seed is picked and
    /// reported on the returned state.
    pub fn reseed(&mut self, master_seed: Option<Seed>) -> &SeedState {
        let state = SeedState::derive(master_seed, self.config.color_names());
        self.seeds.insert(state)
    }

    pub fn seeds(&self) -> SimResult<&SeedState> {
        self.seeds.as_ref().ok_or(SimError::NotSeeded)
    }

    pub fn is_seeded(&self) -> bool {
        self.seeds.is_some()
    }

    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn orb(&self, id: OrbId) -> Option<&Orb> {
        self.catalog.orb(id)
    }

    /// Draw `n` colors from the color stream.
    pub fn roll_colors(&self, n: u64) -> SimResult<RollResult<ColorName>> {
        color_roller::roll_colors(self.seeds()?, &self.config, n)
    }

    /// Draw orbs per color.
    pub fn roll_orbs(&self, request: &OrbRequest) -> SimResult<OrbRolls> {
        orb_roller::roll_orbs(self.seeds()?, &self.catalog, request)
    }

    /// Draw orbs for the colors of a previous `roll_colors` result.
    pub fn roll_orbs_for(&self, colors: &RollResult<ColorName>) -> SimResult<OrbRolls> {
        self.roll_orbs(&OrbRequest::from(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolling_before_reseed_is_not_seeded() {
        let catalog = Catalog::default_test().unwrap();
        let ctx = SimulationContext::from_parts(RollerConfig::default_test(), catalog).unwrap();
        assert!(!ctx.is_seeded());
        assert!(matches!(ctx.roll_colors(1), Err(SimError::NotSeeded)));
        let request = OrbRequest::new().with("blue", 1);
        assert!(matches!(ctx.roll_orbs(&request), Err(SimError::NotSeeded)));
    }

    #[test]
    fn reseed_replaces_previous_state() {
        let mut ctx = SimulationContext::build_test(20).unwrap();
        let first = ctx.seeds().unwrap().clone();
        ctx.reseed(Some(21));
        assert_ne!(ctx.seeds().unwrap().color_seed, first.color_seed);
        ctx.reseed(Some(20));
        assert_eq!(ctx.seeds().unwrap(), &first);
    }

    #[test]
    fn color_roll_feeds_orb_roll() {
        let ctx = SimulationContext::build_test(123).unwrap();
        let colors = ctx.roll_colors(100).unwrap();
        let orbs = ctx.roll_orbs_for(&colors).unwrap();
        for (color, count) in colors.iter() {
            assert_eq!(orbs.get(color).map(RollResult::total), Some(count));
        }
        assert_eq!(orbs.len(), colors.len());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RollerConfig {
            colors: vec![
                crate::config::ColorConfig::new("blue", 1.0),
                crate::config::ColorConfig::new("blue", 1.0),
            ],
        };
        let err = SimulationContext::from_parts(config, Catalog::new()).unwrap_err();
        assert!(err.is_configuration());
    }
}
