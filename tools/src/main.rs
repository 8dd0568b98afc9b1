//! orb-runner: command-line front end for the orb roller.
//!
//! Usage:
//!   orb-runner --seed 123 --colors 100 --data-dir orb_lists
//!   orb-runner --seed 123 --orbs blue=30,red=10
//!   orb-runner --config colors.json --json

use anyhow::{Context, Result};
use orb_roller_core::{
    report::{self, ColorReport},
    roll::parse_count,
    OrbRequest, RollResult, RollerConfig, SeedState, SimulationContext,
};
use std::collections::BTreeMap;
use std::env;

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    /// Master seed plus every derived stream seed, enough to replay the run.
    seeds:  &'a SeedState,
    colors: Option<&'a RollResult<String>>,
    orbs:   BTreeMap<String, ColorReport>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = match flag_value(&args, "--seed") {
        Some(raw) => Some(raw.parse::<u64>().with_context(|| format!("bad --seed '{raw}'"))?),
        None => None,
    };
    let color_count = match flag_value(&args, "--colors") {
        Some(raw) => parse_count(raw)?,
        None => 100,
    };
    let orb_request = flag_value(&args, "--orbs").map(OrbRequest::parse).transpose()?;
    let data_dir = flag_value(&args, "--data-dir").unwrap_or("orb_lists");
    let json = args.iter().any(|a| a == "--json");

    let config = match flag_value(&args, "--config") {
        Some(path) => RollerConfig::load(path)?,
        None => RollerConfig::default(),
    };
    let mut ctx = SimulationContext::initialize(config, data_dir)
        .with_context(|| format!("cannot load orb lists from {data_dir}"))?;

    let master_seed = ctx.reseed(seed).master_seed;
    if !json {
        println!("Using seed {master_seed}");
        println!();
        println!();
    }

    let (colors, orbs) = match orb_request {
        Some(request) => (None, ctx.roll_orbs(&request)?),
        None => {
            let colors = ctx.roll_colors(color_count)?;
            let orbs = ctx.roll_orbs_for(&colors)?;
            (Some(colors), orbs)
        }
    };

    if json {
        let out = JsonReport {
            seeds:  ctx.seeds()?,
            colors: colors.as_ref(),
            orbs:   report::named_orbs(&orbs, ctx.catalog()),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        if let Some(colors) = &colors {
            print!("{}", report::render_colors(color_count, colors));
        }
        print!("{}", report::render_orbs(&orbs, ctx.catalog()));
    }
    log::debug!("orb-runner finished with seed {master_seed}");
    Ok(())
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
