use rand::rngs::StdRng;
use rand::Rng;
use std::sync::Mutex;

use crate::adapters::rng::{seeded_rng, stream};
use crate::domain::models::HistoryEntry;
use crate::domain::ports::ContinuationPolicy;

/// Weighted coin flip: continue with probability `p`, independent of history.
pub struct RandomContinuation {
    probability: f64,
    rng: Mutex<StdRng>,
}

impl RandomContinuation {
    pub const DEFAULT_PROBABILITY: f64 = 0.8;

    /// `probability` is clamped into `[0, 1]`.
    pub fn new(probability: f64, seed: Option<u64>) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            rng: Mutex::new(seeded_rng(seed, stream::CONTINUATION)),
        }
    }

    pub const fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for RandomContinuation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROBABILITY, None)
    }
}

impl ContinuationPolicy for RandomContinuation {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&self, _history: &[HistoryEntry]) -> bool {
        // A poisoned lock still holds a usable generator.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        rng.gen_bool(self.probability)
    }
}
