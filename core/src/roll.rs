//! Roll inputs and outputs.
//!
//! Every roll call produces a fresh `RollResult`. Results are never
//! mutated once returned; rolling a larger count builds a new one.

use crate::{
    error::{SimError, SimResult},
    types::{ColorName, OrbId},
};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Draw counts per key. Iterates in key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RollResult<K: Ord> {
    counts: BTreeMap<K, u64>,
}

impl<K: Ord> Default for RollResult<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<K: Ord> RollResult<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Draws of `key`; 0 when it was never drawn.
    pub fn count<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of draws.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, n)| (k, *n))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Number of distinct keys drawn.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// How many orbs to draw per color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrbRequest {
    counts: BTreeMap<ColorName, u64>,
}

impl OrbRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form: `OrbRequest::new().with("blue", 30)`.
    /// A repeated color overwrites the earlier count.
    pub fn with(mut self, color: impl Into<ColorName>, count: u64) -> Self {
        self.counts.insert(color.into(), count);
        self
    }

    /// Parse `blue=30,red=10`. Negative or non-numeric counts are
    /// `InvalidInput`.
    pub fn parse(text: &str) -> SimResult<Self> {
        let mut request = Self::new();
        for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (color, count) = part.split_once('=').ok_or_else(|| {
                SimError::InvalidInput(format!("expected color=count, got '{part}'"))
            })?;
            let color = color.trim();
            if color.is_empty() {
                return Err(SimError::InvalidInput(format!("missing color in '{part}'")));
            }
            request = request.with(color, parse_count(count)?);
        }
        Ok(request)
    }

    pub fn count(&self, color: &str) -> Option<u64> {
        self.counts.get(color).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Feed a color roll straight into an orb roll.
impl From<&RollResult<ColorName>> for OrbRequest {
    fn from(colors: &RollResult<ColorName>) -> Self {
        Self {
            counts: colors.iter().map(|(c, n)| (c.clone(), n)).collect(),
        }
    }
}

impl<C: Into<ColorName>> FromIterator<(C, u64)> for OrbRequest {
    fn from_iter<I: IntoIterator<Item = (C, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(c, n)| (c.into(), n)).collect(),
        }
    }
}

/// Orb draws for one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorOrbRoll {
    pub requested: u64,
    pub counts:    RollResult<OrbId>,
}

/// Result of one orb roll, keyed by color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OrbRolls {
    by_color: BTreeMap<ColorName, ColorOrbRoll>,
}

impl OrbRolls {
    pub(crate) fn insert(&mut self, color: ColorName, roll: ColorOrbRoll) {
        self.by_color.insert(color, roll);
    }

    pub fn get(&self, color: &str) -> Option<&RollResult<OrbId>> {
        self.by_color.get(color).map(|r| &r.counts)
    }

    pub fn roll(&self, color: &str) -> Option<&ColorOrbRoll> {
        self.by_color.get(color)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorOrbRoll)> {
        self.by_color.iter().map(|(c, r)| (c.as_str(), r))
    }

    pub fn len(&self) -> usize {
        self.by_color.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_color.is_empty()
    }
}

/// Parse a draw count from text. Negative values are `InvalidInput`
/// rather than a parse failure so callers see why.
pub fn parse_count(raw: &str) -> SimResult<u64> {
    let raw = raw.trim();
    let value: i64 = raw
        .parse()
        .map_err(|_| SimError::InvalidInput(format!("draw count '{raw}' is not an integer")))?;
    u64::try_from(value)
        .map_err(|_| SimError::InvalidInput(format!("draw count must be non-negative, got {value}")))
}
