//! Orb catalog: per-color orb lists loaded from CSV.
//!
//! RULES:
//!   - Orb ids are global and assigned in load order, starting at 0.
//!   - Loading a color that is already loaded is a no-op.
//!   - A color's rows are parsed in full before any of them is added,
//!     so a malformed file leaves the catalog unchanged.

use crate::{
    config::RollerConfig,
    error::{SimError, SimResult},
    types::{ColorName, OrbId},
};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

const NAME_COLUMN: &str = "name";
const WEIGHT_COLUMN: &str = "weight";
const DEFAULT_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub id:               OrbId,
    pub color:            ColorName,
    pub name:             String,
    pub processed_weight: f64,
    /// Every other column of the source row, untouched.
    pub metadata:         BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_color: HashMap<ColorName, Vec<OrbId>>,
    orbs:     Vec<Orb>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the orb list of every configured color from `data_dir`.
    pub fn load(config: &RollerConfig, data_dir: impl AsRef<Path>) -> SimResult<Self> {
        let data_dir = data_dir.as_ref();
        let mut catalog = Self::new();
        for color in &config.colors {
            let path = data_dir.join(color.orb_list_file());
            catalog.load_color_file(&color.name, &path)?;
        }
        log::info!(
            "Catalog loaded: {} orbs across {} colors",
            catalog.len(),
            catalog.by_color.len()
        );
        Ok(catalog)
    }

    pub fn load_color_file(&mut self, color: &str, path: &Path) -> SimResult<usize> {
        let file = std::fs::File::open(path).map_err(|source| SimError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.load_color(color, file)
    }

    /// Parse one color's CSV orb list. Returns how many orbs were added.
    pub fn load_color<R: Read>(&mut self, color: &str, source: R) -> SimResult<usize> {
        if self.by_color.contains_key(color) {
            log::debug!("catalog: {color} already loaded, skipping");
            return Ok(0);
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        let headers = reader.headers()?.clone();
        let name_col = headers
            .iter()
            .position(|h| h == NAME_COLUMN)
            .ok_or_else(|| {
                SimError::Configuration(format!("{color} orb list has no '{NAME_COLUMN}' column"))
            })?;
        let weight_col = headers.iter().position(|h| h == WEIGHT_COLUMN);

        let first_id = self.orbs.len();
        let mut parsed = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            // +2: one for the header, one for 1-based line numbers.
            let line = row + 2;
            let name = record
                .get(name_col)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| {
                    SimError::Configuration(format!("{color} orb list line {line}: missing name"))
                })?;
            let processed_weight =
                parse_weight(weight_col.and_then(|i| record.get(i)), color, line)?;
            let metadata = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(i, _)| *i != name_col && Some(*i) != weight_col)
                .map(|(_, (h, v))| (h.to_string(), v.to_string()))
                .collect();
            parsed.push(Orb {
                id: first_id + parsed.len(),
                color: color.to_string(),
                name: name.to_string(),
                processed_weight,
                metadata,
            });
        }

        let added = parsed.len();
        self.by_color
            .insert(color.to_string(), parsed.iter().map(|o| o.id).collect());
        self.orbs.extend(parsed);
        log::debug!("catalog: loaded {added} {color} orbs");
        Ok(added)
    }

    pub fn orb(&self, id: OrbId) -> Option<&Orb> {
        self.orbs.get(id)
    }

    /// Orb ids of `color` in load order.
    pub fn orbs_in(&self, color: &str) -> Option<&[OrbId]> {
        self.by_color.get(color).map(Vec::as_slice)
    }

    /// (id, weight) pairs for `color` in load order.
    pub fn weighted_orbs(&self, color: &str) -> SimResult<Vec<(OrbId, f64)>> {
        let ids = self.orbs_in(color).ok_or_else(|| SimError::UnknownColor {
            color: color.to_string(),
        })?;
        Ok(ids
            .iter()
            .map(|&id| (id, self.orbs[id].processed_weight))
            .collect())
    }

    pub fn contains_color(&self, color: &str) -> bool {
        self.by_color.contains_key(color)
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }

    /// Small in-memory catalog for the default color set.
    /// Used by tests and `SimulationContext::build_test`.
    pub fn default_test() -> SimResult<Self> {
        let mut catalog = Self::new();
        catalog.load_color(
            "blue",
            "name,weight,rarity\nAzure Orb,5,common\nCobalt Orb,3,uncommon\nSapphire Orb,1,rare\n"
                .as_bytes(),
        )?;
        catalog.load_color("red", "name,weight\nEmber Orb,4\nRuby Orb,1\n".as_bytes())?;
        catalog.load_color(
            "purple",
            "name\nAmethyst Orb\nViolet Orb\nPlum Orb\n".as_bytes(),
        )?;
        catalog.load_color(
            "green",
            "name,weight,notes\nMoss Orb,2,\nJade Orb,1,shiny\nEmerald Orb,0.5,\n".as_bytes(),
        )?;
        Ok(catalog)
    }
}

/// Missing column or empty cell means the default weight.
fn parse_weight(raw: Option<&str>, color: &str, line: usize) -> SimResult<f64> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(DEFAULT_WEIGHT),
    };
    let weight: f64 = raw.parse().map_err(|_| {
        SimError::Configuration(format!(
            "{color} orb list line {line}: weight '{raw}' is not a number"
        ))
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(SimError::Configuration(format!(
            "{color} orb list line {line}: weight {weight} must be a non-negative number"
        )));
    }
    Ok(weight)
}
