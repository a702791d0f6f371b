use anyhow::{Context, Result};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::ThreadRng;

use super::action::Turn;

/// Source of the turn taken before each movement step.
///
/// The engine only needs a stream of turns, so tests can substitute a
/// scripted sequence for the weighted sampler.
pub trait TurnPolicy {
    fn next_turn(&mut self) -> Turn;
}

/// Weighted random choice among {Left, Straight, Right}.
///
/// Weights are relative, not normalized. Owns its RNG; sampling has no
/// side effect beyond consuming randomness.
pub struct WeightedTurnPolicy {
    dist: WeightedIndex<f64>,
    rng: ThreadRng,
}

impl WeightedTurnPolicy {
    /// Build a policy from `[w_left, w_straight, w_right]`.
    ///
    /// Fails if the weights are unusable (all zero, or any negative/NaN);
    /// that is a configuration error, not a game outcome.
    pub fn new(weights: [f64; 3]) -> Result<Self> {
        let dist = WeightedIndex::new(weights)
            .with_context(|| format!("invalid turn weights {:?}", weights))?;
        Ok(Self {
            dist,
            rng: rand::thread_rng(),
        })
    }
}

impl TurnPolicy for WeightedTurnPolicy {
    fn next_turn(&mut self) -> Turn {
        match self.dist.sample(&mut self.rng) {
            0 => Turn::Left,
            1 => Turn::Straight,
            _ => Turn::Right,
        }
    }
}
