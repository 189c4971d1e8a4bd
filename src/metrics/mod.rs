//! Distributional statistics for simulation output.

pub mod streaming;
pub mod summary;

pub use streaming::StreamingStats;
pub use summary::{quantile, DrawSummary};
