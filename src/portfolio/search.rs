//! Randomized allocation search.
//!
//! Samples budget allocations uniformly from the probability simplex,
//! evaluates each with Monte Carlo draws per channel, and reports the
//! best-ROI and best-risk-adjusted portfolios among those sampled.
//! Parallelized via Rayon with per-portfolio derived seeds, so output is
//! bit-identical across runs and thread counts.

use log::{debug, info};
use rayon::prelude::*;

use crate::core::error::{AdmixError, Result};
use crate::core::params::ParameterStore;
use crate::core::types::{Allocation, PortfolioResult};
use crate::portfolio::evaluator::evaluate_allocation;
use crate::portfolio::frontier::select_best;
use crate::portfolio::mix_seed;
use crate::portfolio::sampler::AllocationSampler;

/// Configuration for the allocation search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Total budget to split across channels.
    pub total_budget: f64,
    /// Number of random allocations to sample and evaluate.
    pub n_portfolios: usize,
    /// Monte Carlo trials per channel per allocation.
    pub trials_per_channel: usize,
    /// Base seed for the sampler and all evaluation streams.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            total_budget: 50_000.0,
            n_portfolios: 1_000,
            trials_per_channel: 1_000,
            seed: 42,
        }
    }
}

impl SearchConfig {
    fn validate(&self) -> Result<()> {
        if self.n_portfolios == 0 {
            return Err(AdmixError::invalid_config("n_portfolios must be at least 1"));
        }
        if self.trials_per_channel == 0 {
            return Err(AdmixError::invalid_config(
                "trials_per_channel must be at least 1",
            ));
        }
        if !self.total_budget.is_finite() {
            return Err(AdmixError::invalid_config("total_budget must be finite"));
        }
        Ok(())
    }
}

/// Outcome of a portfolio search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Every evaluated portfolio, in sampling order.
    pub results: Vec<PortfolioResult>,
    /// Portfolio with the highest expected ROI among those sampled.
    pub best_roi: PortfolioResult,
    /// Portfolio with the highest defined risk-adjusted ratio; falls
    /// back to `best_roi` when every ratio is undefined.
    pub best_sharpe: PortfolioResult,
}

/// Run the full randomized search over the store's channels.
///
/// Allocations are drawn up-front from a single seeded stream, then
/// evaluated in parallel; each portfolio/channel pair gets its own RNG
/// stream derived from `config.seed`. Two runs with identical inputs
/// yield bit-identical results (and thus identical frontier picks).
pub fn run_portfolio_search(
    store: &ParameterStore,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    config.validate()?;

    info!(
        "portfolio search: {} channels, {} portfolios, {} trials/channel, budget {}",
        store.len(),
        config.n_portfolios,
        config.trials_per_channel,
        config.total_budget,
    );

    let mut sampler = AllocationSampler::new(config.seed);
    let allocations: Vec<Allocation> = (0..config.n_portfolios)
        .map(|_| sampler.sample(store.len()))
        .collect::<Result<_>>()?;

    let results: Vec<PortfolioResult> = allocations
        .par_iter()
        .enumerate()
        .map(|(i, allocation)| {
            let eval_seed = mix_seed(config.seed, 1 + i as u64);
            evaluate_allocation(
                allocation,
                config.total_budget,
                store,
                config.trials_per_channel,
                eval_seed,
            )
        })
        .collect::<Result<_>>()?;

    // Non-empty by construction: n_portfolios >= 1 was validated.
    let picks = select_best(&results)
        .ok_or_else(|| AdmixError::empty_data("portfolio search results"))?;

    debug!(
        "best ROI {:.2}% | best risk-adjusted {:.3}",
        picks.best_roi.expected_roi, picks.best_sharpe.risk_adjusted,
    );

    Ok(SearchOutcome {
        results,
        best_roi: picks.best_roi,
        best_sharpe: picks.best_sharpe,
    })
}
