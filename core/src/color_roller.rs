//! Color rolls.
//!
//! Each call re-creates the color stream from the color seed, so
//! `roll_colors(n + 1)` replays the `n` draws of `roll_colors(n)` and
//! adds exactly one more.

use crate::{
    config::RollerConfig,
    error::{SimError, SimResult},
    rng::RollRng,
    roll::RollResult,
    sampler::WeightedSampler,
    seed::SeedState,
    types::ColorName,
};

pub fn roll_colors(
    seeds: &SeedState,
    config: &RollerConfig,
    n: u64,
) -> SimResult<RollResult<ColorName>> {
    // Zero-weight colors can never be drawn; leaving them out keeps the
    // sampler's positive-weight precondition.
    let candidates: Vec<(ColorName, f64)> = config
        .colors
        .iter()
        .filter(|c| c.weight > 0.0)
        .map(|c| (c.name.clone(), c.weight))
        .collect();
    if candidates.is_empty() {
        return Err(SimError::InvalidInput(
            "no configured color has a positive weight".into(),
        ));
    }
    let sampler = WeightedSampler::new(candidates)?;

    let mut rng = RollRng::from_seed(seeds.color_seed).with_name("colors");
    let mut result = RollResult::new();
    for _ in 0..n {
        result.record(sampler.sample(&mut rng).clone());
    }
    log::debug!(
        "{}: rolled {n} draws over {} colors",
        rng.name,
        sampler.len()
    );
    Ok(result)
}
