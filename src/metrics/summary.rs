//! Distributional summary of a channel's Monte Carlo draws.
//!
//! The statistics reporting layers read: expected ROI, spread of ROI,
//! expected profit, probability of loss, and Value at Risk at 5%.

use serde::Serialize;

use crate::core::error::{AdmixError, Result};
use crate::core::types::SimulationDraw;
use crate::metrics::streaming::StreamingStats;

/// Quantile of a sorted sample by nearest-rank interpolation.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() - 1) as f64 * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn sorted(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut v: Vec<f64> = values.collect();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    v
}

/// Summary statistics over one channel's draw sequence.
#[derive(Debug, Clone, Serialize)]
pub struct DrawSummary {
    /// Number of trials summarized.
    pub trials: usize,
    /// Mean ROI in percent.
    pub mean_roi: f64,
    /// Median ROI in percent.
    pub median_roi: f64,
    /// Sample standard deviation of ROI.
    pub std_roi: f64,
    /// Mean profit.
    pub mean_profit: f64,
    /// Sample standard deviation of profit.
    pub std_profit: f64,
    /// Fraction of trials with negative profit.
    pub probability_of_loss: f64,
    /// Value at Risk at the 5% level: 5th percentile of profit.
    pub var_5: f64,
}

impl DrawSummary {
    /// Summarize a draw sequence. Empty input is an error.
    pub fn from_draws(draws: &[SimulationDraw]) -> Result<Self> {
        if draws.is_empty() {
            return Err(AdmixError::empty_data("draw summary"));
        }

        let roi_stats = StreamingStats::from_values(
            &draws.iter().map(|d| d.roi).collect::<Vec<_>>(),
        );
        let profit_stats = StreamingStats::from_values(
            &draws.iter().map(|d| d.profit).collect::<Vec<_>>(),
        );

        let sorted_roi = sorted(draws.iter().map(|d| d.roi));
        let sorted_profit = sorted(draws.iter().map(|d| d.profit));

        let losses = draws.iter().filter(|d| d.profit < 0.0).count();

        Ok(Self {
            trials: draws.len(),
            mean_roi: roi_stats.mean(),
            median_roi: quantile(&sorted_roi, 0.5),
            std_roi: roi_stats.std_dev(),
            mean_profit: profit_stats.mean(),
            std_profit: profit_stats.std_dev(),
            probability_of_loss: losses as f64 / draws.len() as f64,
            var_5: quantile(&sorted_profit, 0.05),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(profit: f64, roi: f64) -> SimulationDraw {
        SimulationDraw {
            cpc: 1.0,
            ctr: 0.05,
            conversion_rate: 0.02,
            ticket: 100.0,
            clicks: 100,
            impressions: 2000,
            conversions: 2,
            revenue: 200.0,
            profit,
            roi,
        }
    }

    #[test]
    fn test_summary_statistics() {
        let draws: Vec<SimulationDraw> = vec![
            draw(-100.0, -10.0),
            draw(0.0, 0.0),
            draw(100.0, 10.0),
            draw(200.0, 20.0),
        ];
        let s = DrawSummary::from_draws(&draws).unwrap();

        assert_eq!(s.trials, 4);
        assert!((s.mean_profit - 50.0).abs() < 1e-10);
        assert!((s.mean_roi - 5.0).abs() < 1e-10);
        assert!((s.probability_of_loss - 0.25).abs() < 1e-10);
        // 5th percentile rounds to the worst draw for a 4-point sample.
        assert!((s.var_5 - (-100.0)).abs() < 1e-10);
    }

    #[test]
    fn test_empty_draws_rejected() {
        assert!(DrawSummary::from_draws(&[]).is_err());
    }

    #[test]
    fn test_quantile_bounds() {
        let v = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&v, 0.0), 1.0);
        assert_eq!(quantile(&v, 1.0), 4.0);
        assert_eq!(quantile(&[], 0.5), 0.0);
    }
}
