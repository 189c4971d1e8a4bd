//! Randomized portfolio search over budget allocations.

pub mod evaluator;
pub mod frontier;
pub mod sampler;
pub mod search;

pub use evaluator::evaluate_allocation;
pub use frontier::{select_best, FrontierSelection};
pub use sampler::AllocationSampler;
pub use search::{run_portfolio_search, SearchConfig, SearchOutcome};

/// SplitMix64-style mix for deriving independent RNG streams from a base
/// seed. One stream per unit of work keeps parallel runs reproducible.
pub(crate) fn mix_seed(seed: u64, index: u64) -> u64 {
    let mut z = seed ^ index.wrapping_mul(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
