//! Orb rolls.
//!
//! RULES:
//!   - Every requested color gets its own stream, re-created from that
//!     color's orb seed. Other colors in the request never touch it.
//!   - Every color is validated before any draw, so a failed request
//!     returns nothing.

use crate::{
    catalog::Catalog,
    error::{SimError, SimResult},
    rng::RollRng,
    roll::{ColorOrbRoll, OrbRequest, OrbRolls, RollResult},
    sampler::WeightedSampler,
    seed::SeedState,
    types::{OrbId, Seed},
};

struct ColorPlan<'a> {
    color:   &'a str,
    count:   u64,
    seed:    Seed,
    sampler: WeightedSampler<OrbId>,
}

pub fn roll_orbs(
    seeds: &SeedState,
    catalog: &Catalog,
    request: &OrbRequest,
) -> SimResult<OrbRolls> {
    let plans = request
        .iter()
        .map(|(color, count)| plan_color(seeds, catalog, color, count))
        .collect::<SimResult<Vec<_>>>()?;

    let mut rolls = OrbRolls::default();
    for plan in plans {
        let mut rng = RollRng::from_seed(plan.seed).with_name(plan.color);
        let mut counts = RollResult::new();
        for _ in 0..plan.count {
            counts.record(*plan.sampler.sample(&mut rng));
        }
        log::debug!("{}: rolled {} orbs", rng.name, plan.count);
        rolls.insert(
            plan.color.to_string(),
            ColorOrbRoll {
                requested: plan.count,
                counts,
            },
        );
    }
    Ok(rolls)
}

fn plan_color<'a>(
    seeds: &SeedState,
    catalog: &Catalog,
    color: &'a str,
    count: u64,
) -> SimResult<ColorPlan<'a>> {
    let unknown = || SimError::UnknownColor {
        color: color.to_string(),
    };
    let candidates: Vec<(OrbId, f64)> = catalog
        .weighted_orbs(color)?
        .into_iter()
        .filter(|(_, weight)| *weight > 0.0)
        .collect();
    let seed = seeds.orb_seed(color).ok_or_else(unknown)?;
    if candidates.is_empty() {
        return Err(SimError::InvalidInput(format!(
            "color '{color}' has no orbs with a positive weight"
        )));
    }
    Ok(ColorPlan {
        color,
        count,
        seed,
        sampler: WeightedSampler::new(candidates)?,
    })
}
