//! Core types and utilities for Admix.

pub mod error;
pub mod params;
pub mod types;

pub use error::{AdmixError, Result};
pub use params::ParameterStore;
pub use types::*;
