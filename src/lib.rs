//! Admix - Monte Carlo marketing spend allocator.
//!
//! This crate provides:
//! - Per-channel stochastic simulation of cost-per-click, click-through
//!   rate, conversion rate, and ticket size
//! - Distributional summaries (expected ROI, probability of loss, VaR)
//! - Randomized budget-allocation search over the probability simplex
//! - Frontier selection of best-ROI and best-risk-adjusted portfolios
//!
//! All randomness flows through explicitly seeded [`rand_chacha::ChaCha8Rng`]
//! streams, so results are reproducible regardless of thread count.

pub mod core;
pub mod metrics;
pub mod portfolio;
pub mod simulate;

pub use crate::core::error::{AdmixError, Result};
pub use crate::core::params::ParameterStore;
pub use crate::core::types::{Allocation, ChannelParams, PortfolioResult, SimulationDraw};
pub use crate::portfolio::search::{run_portfolio_search, SearchConfig, SearchOutcome};
pub use crate::simulate::channel::simulate_channel;
