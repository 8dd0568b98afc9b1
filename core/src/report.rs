//! Plain-text roll reports.
//!
//! Colors print in name order and orbs in id order, so the same roll
//! always renders the same text.

use crate::{
    catalog::Catalog,
    roll::{OrbRolls, RollResult},
    types::{ColorName, OrbId},
};
use serde::Serialize;
use std::collections::BTreeMap;

/// One drawn orb with its display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbCount {
    pub id:    OrbId,
    pub name:  String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    pub requested: u64,
    /// Sorted by orb id.
    pub orbs:      Vec<OrbCount>,
}

/// Orb rolls joined with catalog names, for JSON output.
/// Orbs missing from the catalog get the name `#<id>`.
pub fn named_orbs(rolls: &OrbRolls, catalog: &Catalog) -> BTreeMap<ColorName, ColorReport> {
    rolls
        .iter()
        .map(|(color, roll)| {
            let orbs = roll
                .counts
                .iter()
                .map(|(id, count)| OrbCount {
                    id:    *id,
                    name:  orb_name(catalog, *id),
                    count,
                })
                .collect();
            let report = ColorReport {
                requested: roll.requested,
                orbs,
            };
            (color.to_string(), report)
        })
        .collect()
}

fn orb_name(catalog: &Catalog, id: OrbId) -> String {
    catalog
        .orb(id)
        .map(|orb| orb.name.clone())
        .unwrap_or_else(|| format!("#{id}"))
}

pub fn render_colors(n: u64, colors: &RollResult<ColorName>) -> String {
    let mut out = format!("Rolling {n} colors:\n\n");
    for (color, count) in colors.iter() {
        out.push_str(&format!("{color}: {count}\n"));
    }
    out.push_str("\n\n");
    out
}

/// Orbs missing from `catalog` print as `#<id>`.
pub fn render_orbs(rolls: &OrbRolls, catalog: &Catalog) -> String {
    let mut out = String::new();
    for (color, roll) in rolls.iter() {
        out.push_str(&format!("{} {color} orbs:\n\n", roll.requested));
        for (id, count) in roll.counts.iter() {
            out.push_str(&format!("{} ({count})\n", orb_name(catalog, *id)));
        }
        out.push_str("\n\n");
    }
    out
}
