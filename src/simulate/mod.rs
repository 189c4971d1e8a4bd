//! Per-channel Monte Carlo simulation.

pub mod channel;

pub use channel::{simulate_channel, simulate_channel_seeded};
