//! Random budget-weight sampling on the probability simplex.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Gamma};

use crate::core::error::{AdmixError, Result};
use crate::core::types::Allocation;

/// Below this, a gamma-draw sum is treated as degenerate and resampled.
const MIN_WEIGHT_SUM: f64 = 1e-12;
/// Resample attempts before falling back to equal weights.
const MAX_RESAMPLES: usize = 8;

/// Samples allocations uniformly from the probability simplex.
///
/// Normalizing independent Gamma(shape=1, scale=1) draws by their sum is
/// equivalent to a symmetric Dirichlet(1, ..., 1) draw.
pub struct AllocationSampler {
    rng: ChaCha8Rng,
    gamma: Gamma<f64>,
}

impl AllocationSampler {
    /// Create a sampler with its own seeded stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            gamma: Gamma::new(1.0, 1.0).expect("Gamma(1, 1) parameters are valid"),
        }
    }

    /// Draw one allocation across `n_channels` channels.
    ///
    /// Weights are non-negative and sum to 1.0 within floating tolerance.
    /// If the gamma draws all come out ~0 the vector is resampled; after
    /// a bounded number of failures the sampler falls back to equal
    /// weights so the output stays exactly on the simplex.
    pub fn sample(&mut self, n_channels: usize) -> Result<Allocation> {
        if n_channels == 0 {
            return Err(AdmixError::invalid_config(
                "allocation requires at least one channel",
            ));
        }

        for _ in 0..MAX_RESAMPLES {
            let draws: Vec<f64> = (0..n_channels)
                .map(|_| self.gamma.sample(&mut self.rng))
                .collect();
            let sum: f64 = draws.iter().sum();
            if sum > MIN_WEIGHT_SUM {
                let weights = draws.iter().map(|d| d / sum).collect();
                return Ok(Allocation { weights });
            }
        }

        Ok(Allocation {
            weights: vec![1.0 / n_channels as f64; n_channels],
        })
    }
}
