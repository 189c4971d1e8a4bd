//! Channel parameter table.
//!
//! The table is injected configuration: it must be supplied and validated
//! before any simulation runs, and is read-only afterwards.

use log::debug;

use crate::core::error::{AdmixError, Result};
use crate::core::types::ChannelParams;

/// Validated, read-only table of per-channel stochastic parameters.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    channels: Vec<ChannelParams>,
}

impl ParameterStore {
    /// Build a store from a list of channel parameters.
    ///
    /// Every channel is validated up-front; the first violation aborts
    /// the load with no partial table. An empty list is rejected.
    pub fn new(channels: Vec<ChannelParams>) -> Result<Self> {
        if channels.is_empty() {
            return Err(AdmixError::empty_data("channel parameter table"));
        }
        for channel in &channels {
            channel.validate()?;
        }

        debug!("loaded parameter table with {} channels", channels.len());
        Ok(Self { channels })
    }

    /// Build a store from a JSON array of channel parameter objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let channels: Vec<ChannelParams> = serde_json::from_str(json)
            .map_err(|e| AdmixError::invalid_parameter(format!("channel table JSON: {e}")))?;
        Self::new(channels)
    }

    /// All channels, in load order.
    #[inline]
    pub fn channels(&self) -> &[ChannelParams] {
        &self.channels
    }

    /// Number of channels.
    #[inline]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Always false; construction rejects empty tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Look up a channel by name.
    pub fn get(&self, name: &str) -> Result<&ChannelParams> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| AdmixError::unknown_channel(name))
    }
}
