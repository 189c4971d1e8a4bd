//! Error types for Admix.

use thiserror::Error;

/// Result type alias for Admix operations.
pub type Result<T> = std::result::Result<T, AdmixError>;

/// Error types for the simulation and allocation-search engine.
#[derive(Error, Debug)]
pub enum AdmixError {
    /// Invalid channel parameter (negative stddev, non-positive mean, ...).
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Invalid simulation or search configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Channel name not present in the parameter table.
    #[error("Unknown channel: {name}")]
    UnknownChannel { name: String },

    /// Empty data error.
    #[error("Empty data provided for {context}")]
    EmptyData { context: String },
}

impl AdmixError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unknown channel error.
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        Self::UnknownChannel { name: name.into() }
    }

    /// Create an empty data error.
    pub fn empty_data(context: impl Into<String>) -> Self {
        Self::EmptyData {
            context: context.into(),
        }
    }
}
