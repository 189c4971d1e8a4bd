//! Core data types for Admix.

use serde::{Deserialize, Serialize};

use crate::core::error::{AdmixError, Result};

/// Stochastic parameters of a single advertising channel.
///
/// Each metric is modeled as an independent normal distribution with the
/// given mean and standard deviation. Draws are clamped to economically
/// sensible ranges by the channel simulator, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelParams {
    /// Channel display name (e.g. "Google Ads").
    pub name: String,
    /// Mean cost per click.
    pub cpc_mean: f64,
    /// Standard deviation of cost per click.
    pub cpc_std: f64,
    /// Mean click-through rate.
    pub ctr_mean: f64,
    /// Standard deviation of click-through rate.
    pub ctr_std: f64,
    /// Mean conversion rate.
    pub conversion_mean: f64,
    /// Standard deviation of conversion rate.
    pub conversion_std: f64,
    /// Mean sale value per conversion.
    pub ticket_mean: f64,
    /// Standard deviation of sale value.
    pub ticket_std: f64,
}

impl ChannelParams {
    /// Validate the parameter set: means must be positive and finite,
    /// standard deviations non-negative and finite, name non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(AdmixError::invalid_parameter("channel name is empty"));
        }

        let means = [
            ("cpc_mean", self.cpc_mean),
            ("ctr_mean", self.ctr_mean),
            ("conversion_mean", self.conversion_mean),
            ("ticket_mean", self.ticket_mean),
        ];
        for (field, value) in means {
            if !value.is_finite() || value <= 0.0 {
                return Err(AdmixError::invalid_parameter(format!(
                    "{}: {} must be positive and finite, got {}",
                    self.name, field, value
                )));
            }
        }

        let stds = [
            ("cpc_std", self.cpc_std),
            ("ctr_std", self.ctr_std),
            ("conversion_std", self.conversion_std),
            ("ticket_std", self.ticket_std),
        ];
        for (field, value) in stds {
            if !value.is_finite() || value < 0.0 {
                return Err(AdmixError::invalid_parameter(format!(
                    "{}: {} must be non-negative and finite, got {}",
                    self.name, field, value
                )));
            }
        }

        Ok(())
    }
}

/// One Monte Carlo trial for a channel/budget pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationDraw {
    /// Realized cost per click (floored at 0.01).
    pub cpc: f64,
    /// Realized click-through rate (clamped to [0.001, 1.0]).
    pub ctr: f64,
    /// Realized conversion rate (clamped to [0.001, 1.0]).
    pub conversion_rate: f64,
    /// Realized sale value per conversion (floored at 10.0).
    pub ticket: f64,
    /// Clicks bought: floor(budget / cpc).
    pub clicks: u64,
    /// Impressions implied by the clicks: floor(clicks / ctr).
    pub impressions: u64,
    /// Conversions: floor(clicks * conversion_rate).
    pub conversions: u64,
    /// Revenue: conversions * ticket.
    pub revenue: f64,
    /// Profit: revenue - budget.
    pub profit: f64,
    /// Return on investment in percent; 0 when budget is 0.
    pub roi: f64,
}

/// Budget weights across channels, one per channel, summing to 1.
///
/// Produced by the allocation sampler; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Per-channel weights in parameter-table order.
    pub weights: Vec<f64>,
}

impl Allocation {
    /// Number of channels covered by this allocation.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Aggregate outcome of evaluating one allocation across all channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioResult {
    /// The allocation that produced this result.
    pub allocation: Allocation,
    /// Budget-weighted expected ROI in percent.
    pub expected_roi: f64,
    /// Expected total profit across channels.
    pub expected_profit: f64,
    /// Profit standard deviation proxy: sqrt(sum((w_i * std_i)^2)),
    /// assuming channel independence.
    pub risk: f64,
    /// Sharpe-like ratio: expected profit per unit of risk. `NaN` when
    /// risk is exactly zero (the undefined-ratio sentinel).
    pub risk_adjusted: f64,
}

impl PortfolioResult {
    /// Whether the risk-adjusted ratio is defined (risk was non-zero).
    #[inline]
    pub fn has_defined_ratio(&self) -> bool {
        self.risk_adjusted.is_finite()
    }
}
