//! Seedable randomness source for mock-data enrichment.
//!
//! KPI and generated sales figures get a small random lift per request.
//! The source is injected rather than hard-coded so tests and demos can
//! pin the seed and get reproducible numbers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

/// Shared random value source backed by a [`StdRng`].
#[derive(Debug, Clone)]
pub struct JitterSource {
    rng: Arc<Mutex<StdRng>>,
}

impl JitterSource {
    /// Creates a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    /// Creates a source with a fixed seed; the value stream is then fully
    /// reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Uniform value in `[0, upper)`.
    pub fn amount(&self, upper: u64) -> u64 {
        self.in_range(0, upper)
    }

    /// Uniform value in `[low, high)`.
    pub fn in_range(&self, low: u64, high: u64) -> u64 {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(low..high)
    }
}
