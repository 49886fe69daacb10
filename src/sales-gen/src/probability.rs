use rand::distributions::Distribution;
use rand::distributions::WeightedIndex;
use rand::Rng;

use crate::error::Result;
use crate::error::SalesGenError;

/// Draws one of a fixed set of outcomes, each with its own weight.
///
/// Weights are relative and normalised by the underlying [`WeightedIndex`],
/// so `[(10, 0.4), (15, 0.3), (20, 0.3)]` and `[(10, 4.), (15, 3.), (20, 3.)]`
/// describe the same distribution.
#[derive(Debug, Clone)]
pub struct Categorical<T> {
    outcomes: Vec<T>,
    weight_idx: WeightedIndex<f64>,
}

impl<T> Categorical<T> {
    pub fn try_new<I>(pairs: I) -> Result<Self>
    where I: IntoIterator<Item = (T, f64)> {
        let (outcomes, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let weight_idx = WeightedIndex::new(weights)
            .map_err(|err| SalesGenError::Internal(format!("categorical weights: {err}")))?;

        Ok(Self {
            outcomes,
            weight_idx,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.outcomes[self.weight_idx.sample(rng)]
    }
}
