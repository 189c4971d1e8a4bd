//! Portfolio evaluation: one allocation, all channels, aggregated.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::error::{AdmixError, Result};
use crate::core::params::ParameterStore;
use crate::core::types::{Allocation, PortfolioResult};
use crate::metrics::streaming::StreamingStats;
use crate::portfolio::mix_seed;
use crate::simulate::channel::simulate_channel;

/// Evaluate a single allocation of `total_budget` across the store's
/// channels.
///
/// Each channel with a positive slice of the budget is simulated with
/// `trials_per_channel` draws on its own RNG stream derived from `seed`
/// and the channel index, so evaluations of different channels (or of
/// different allocations) may run concurrently without changing results.
///
/// Aggregation assumes channel independence: expected ROI is the
/// budget-weighted mean ROI, expected profit is the sum of per-channel
/// mean profits, and risk combines weighted profit stddevs in
/// quadrature. When risk is exactly zero the risk-adjusted ratio is the
/// `NaN` sentinel, never zero or infinity.
pub fn evaluate_allocation(
    allocation: &Allocation,
    total_budget: f64,
    store: &ParameterStore,
    trials_per_channel: usize,
    seed: u64,
) -> Result<PortfolioResult> {
    if allocation.len() != store.len() {
        return Err(AdmixError::invalid_config(format!(
            "allocation covers {} channels, parameter table has {}",
            allocation.len(),
            store.len()
        )));
    }
    if trials_per_channel == 0 {
        return Err(AdmixError::invalid_config(
            "trials_per_channel must be at least 1",
        ));
    }
    if !total_budget.is_finite() {
        return Err(AdmixError::invalid_config("total_budget must be finite"));
    }

    let mut expected_roi = 0.0;
    let mut expected_profit = 0.0;
    let mut risk_sq = 0.0;

    for (i, (channel, &weight)) in store
        .channels()
        .iter()
        .zip(allocation.weights.iter())
        .enumerate()
    {
        let channel_budget = total_budget * weight;
        if channel_budget <= 0.0 {
            // Zero-budget channels contribute nothing; valid, not an error.
            continue;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(mix_seed(seed, i as u64));
        let draws = simulate_channel(channel, channel_budget, trials_per_channel, &mut rng)?;

        let mut roi_stats = StreamingStats::new();
        let mut profit_stats = StreamingStats::new();
        for draw in &draws {
            roi_stats.update(draw.roi);
            profit_stats.update(draw.profit);
        }

        expected_roi += weight * roi_stats.mean();
        expected_profit += profit_stats.mean();
        risk_sq += (weight * profit_stats.std_dev()).powi(2);
    }

    let risk = risk_sq.sqrt();
    let risk_adjusted = if risk > 0.0 {
        expected_profit / risk
    } else {
        f64::NAN
    };

    Ok(PortfolioResult {
        allocation: allocation.clone(),
        expected_roi,
        expected_profit,
        risk,
        risk_adjusted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ChannelParams;

    fn channel(name: &str, cpc_mean: f64) -> ChannelParams {
        ChannelParams {
            name: name.to_string(),
            cpc_mean,
            cpc_std: 0.1,
            ctr_mean: 0.03,
            ctr_std: 0.005,
            conversion_mean: 0.03,
            conversion_std: 0.005,
            ticket_mean: 150.0,
            ticket_std: 30.0,
        }
    }

    fn two_channel_store() -> ParameterStore {
        ParameterStore::new(vec![channel("A", 2.5), channel("B", 1.5)]).unwrap()
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let store = two_channel_store();
        let alloc = Allocation {
            weights: vec![1.0],
        };
        assert!(evaluate_allocation(&alloc, 10_000.0, &store, 100, 42).is_err());
    }

    #[test]
    fn test_zero_trials_rejected() {
        let store = two_channel_store();
        let alloc = Allocation {
            weights: vec![0.5, 0.5],
        };
        assert!(evaluate_allocation(&alloc, 10_000.0, &store, 0, 42).is_err());
    }

    #[test]
    fn test_zero_budget_yields_nan_sentinel() {
        let store = two_channel_store();
        let alloc = Allocation {
            weights: vec![0.5, 0.5],
        };
        let result = evaluate_allocation(&alloc, 0.0, &store, 100, 42).unwrap();

        assert_eq!(result.expected_roi, 0.0);
        assert_eq!(result.expected_profit, 0.0);
        assert_eq!(result.risk, 0.0);
        assert!(result.risk_adjusted.is_nan());
        assert!(!result.has_defined_ratio());
    }

    #[test]
    fn test_zero_weight_channel_skipped() {
        let store = two_channel_store();
        let all_in_a = Allocation {
            weights: vec![1.0, 0.0],
        };
        let result = evaluate_allocation(&all_in_a, 10_000.0, &store, 500, 42).unwrap();

        // Channel B contributes nothing; risk comes from A alone.
        assert!(result.risk > 0.0);
        assert!(result.has_defined_ratio());
    }

    #[test]
    fn test_deterministic_given_seed() {
        let store = two_channel_store();
        let alloc = Allocation {
            weights: vec![0.3, 0.7],
        };
        let a = evaluate_allocation(&alloc, 20_000.0, &store, 300, 9).unwrap();
        let b = evaluate_allocation(&alloc, 20_000.0, &store, 300, 9).unwrap();

        assert_eq!(a.expected_roi, b.expected_roi);
        assert_eq!(a.expected_profit, b.expected_profit);
        assert_eq!(a.risk, b.risk);
    }

    #[test]
    fn test_risk_combines_in_quadrature() {
        // One deterministic channel (all stddevs zero) adds no risk.
        let mut fixed = channel("Fixed", 2.0);
        fixed.cpc_std = 0.0;
        fixed.ctr_std = 0.0;
        fixed.conversion_std = 0.0;
        fixed.ticket_std = 0.0;
        let store = ParameterStore::new(vec![channel("Noisy", 2.5), fixed]).unwrap();

        let noisy_only = Allocation {
            weights: vec![1.0, 0.0],
        };
        let split = Allocation {
            weights: vec![0.5, 0.5],
        };

        let r_noisy = evaluate_allocation(&noisy_only, 10_000.0, &store, 400, 5).unwrap();
        let r_split = evaluate_allocation(&split, 10_000.0, &store, 400, 5).unwrap();

        // Halving the noisy weight should roughly halve the risk; the
        // fixed channel contributes zero variance.
        assert!(r_split.risk < r_noisy.risk);
    }
}
