//! Frontier selection over evaluated portfolios.
//!
//! This is a sampling-based approximation of the efficient frontier: the
//! picks are the best among the portfolios actually sampled, not a
//! global or Pareto-exact optimum.

use crate::core::types::PortfolioResult;

/// The two portfolios a search reports back.
#[derive(Debug, Clone)]
pub struct FrontierSelection {
    /// Portfolio with the highest expected ROI.
    pub best_roi: PortfolioResult,
    /// Portfolio with the highest risk-adjusted ratio. Falls back to
    /// `best_roi` when no sampled portfolio has a defined ratio.
    pub best_sharpe: PortfolioResult,
}

/// Scan evaluated portfolios for the best-ROI and best-risk-adjusted
/// candidates.
///
/// Single stable pass: ties keep the first-encountered result. Results
/// with the `NaN` risk-adjusted sentinel are excluded from the Sharpe
/// ranking. Returns `None` for an empty input.
pub fn select_best(results: &[PortfolioResult]) -> Option<FrontierSelection> {
    let first = results.first()?;

    let mut best_roi = first;
    let mut best_sharpe: Option<&PortfolioResult> = None;

    for result in results {
        if result.expected_roi > best_roi.expected_roi {
            best_roi = result;
        }
        if result.has_defined_ratio() {
            match best_sharpe {
                Some(current) if result.risk_adjusted <= current.risk_adjusted => {}
                _ => best_sharpe = Some(result),
            }
        }
    }

    Some(FrontierSelection {
        best_roi: best_roi.clone(),
        best_sharpe: best_sharpe.unwrap_or(best_roi).clone(),
    })
}
