//! Channel simulator: stochastic draws for one channel/budget pair.
//!
//! Each trial draws cost-per-click, click-through rate, conversion rate,
//! and ticket size from independent normal distributions, clamps them to
//! economically sensible ranges, and derives click/conversion counts and
//! financial metrics. Trials are i.i.d. given the channel parameters, so
//! callers are free to batch or parallelize across trials.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::core::error::{AdmixError, Result};
use crate::core::types::{ChannelParams, SimulationDraw};

/// Floor for realized cost per click; no free or negative clicks.
const MIN_CPC: f64 = 0.01;
/// Lower clamp for click-through and conversion rates.
const MIN_RATE: f64 = 0.001;
/// Upper clamp for click-through and conversion rates.
const MAX_RATE: f64 = 1.0;
/// Floor for realized ticket value.
const MIN_TICKET: f64 = 10.0;

fn normal(context: &str, mean: f64, std: f64) -> Result<Normal<f64>> {
    Normal::new(mean, std)
        .map_err(|e| AdmixError::invalid_parameter(format!("{context}: {e}")))
}

/// Run `trials` Monte Carlo draws for a channel at the given budget.
///
/// The caller owns the random stream; two calls with identically seeded
/// RNGs produce identical draw sequences. A budget of zero (or less) is
/// degenerate but valid: every draw carries zero counts, zero profit,
/// and ROI exactly 0. Invalid channel parameters abort the call with no
/// partial results.
pub fn simulate_channel<R: Rng + ?Sized>(
    channel: &ChannelParams,
    budget: f64,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<SimulationDraw>> {
    channel.validate()?;

    let cpc_dist = normal("cpc", channel.cpc_mean, channel.cpc_std)?;
    let ctr_dist = normal("ctr", channel.ctr_mean, channel.ctr_std)?;
    let conversion_dist = normal(
        "conversion_rate",
        channel.conversion_mean,
        channel.conversion_std,
    )?;
    let ticket_dist = normal("ticket", channel.ticket_mean, channel.ticket_std)?;

    let mut draws = Vec::with_capacity(trials);
    for _ in 0..trials {
        let cpc = cpc_dist.sample(rng).max(MIN_CPC);
        let ctr = ctr_dist.sample(rng).clamp(MIN_RATE, MAX_RATE);
        let conversion_rate = conversion_dist.sample(rng).clamp(MIN_RATE, MAX_RATE);
        let ticket = ticket_dist.sample(rng).max(MIN_TICKET);

        // Count derivation uses floor division; a non-positive budget
        // buys nothing and contributes nothing.
        let (clicks, impressions, conversions, revenue, profit, roi) = if budget > 0.0 {
            let clicks = (budget / cpc).floor() as u64;
            let impressions = (clicks as f64 / ctr).floor() as u64;
            let conversions = (clicks as f64 * conversion_rate).floor() as u64;
            let revenue = conversions as f64 * ticket;
            let profit = revenue - budget;
            let roi = profit / budget * 100.0;
            (clicks, impressions, conversions, revenue, profit, roi)
        } else {
            (0, 0, 0, 0.0, 0.0, 0.0)
        };

        draws.push(SimulationDraw {
            cpc,
            ctr,
            conversion_rate,
            ticket,
            clicks,
            impressions,
            conversions,
            revenue,
            profit,
            roi,
        });
    }

    Ok(draws)
}

/// Convenience wrapper that owns a fresh ChaCha8 stream for the call.
pub fn simulate_channel_seeded(
    channel: &ChannelParams,
    budget: f64,
    trials: usize,
    seed: u64,
) -> Result<Vec<SimulationDraw>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    simulate_channel(channel, budget, trials, &mut rng)
}
