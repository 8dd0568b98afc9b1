//! Weighted sampling over (key, weight) pairs.

use crate::{
    error::{SimError, SimResult},
    rng::RollRng,
};
use rand::distributions::{Distribution, WeightedIndex};

/// Draws keys with probability proportional to their weight.
///
/// Built once per roll, then sampled once per draw. Every `sample`
/// call consumes exactly one draw from the stream.
#[derive(Debug, Clone)]
pub struct WeightedSampler<K> {
    keys:  Vec<K>,
    index: WeightedIndex<f64>,
}

impl<K> WeightedSampler<K> {
    /// Fails with `InvalidInput` on an empty list or on any weight that
    /// is not a positive finite number.
    pub fn new<I>(items: I) -> SimResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
    {
        let (keys, weights): (Vec<K>, Vec<f64>) = items.into_iter().unzip();
        if keys.is_empty() {
            return Err(SimError::InvalidInput(
                "cannot sample from an empty item list".into(),
            ));
        }
        if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
            return Err(SimError::InvalidInput(format!(
                "sampling weights must be positive, got {bad}"
            )));
        }
        let index = WeightedIndex::new(&weights)
            .map_err(|e| SimError::InvalidInput(format!("bad sampling weights: {e}")))?;
        Ok(Self { keys, index })
    }

    pub fn sample(&self, rng: &mut RollRng) -> &K {
        &self.keys[self.index.sample(rng.inner_mut())]
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// One-shot weighted draw.
pub fn sample<K: Clone>(rng: &mut RollRng, items: &[(K, f64)]) -> SimResult<K> {
    let sampler = WeightedSampler::new(items.iter().cloned())?;
    Ok(sampler.sample(rng).clone())
}
