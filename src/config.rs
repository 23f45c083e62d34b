//! Configuration for scullstore
//!
//! Centralized configuration with sensible defaults. These knobs are fixed at
//! startup and applied to every store the device table creates.

use crate::error::{Result, ScullError};
use crate::store::Layout;

/// Default number of devices
pub const DEFAULT_DEVICE_COUNT: usize = 4;

/// Default index of the first device
pub const DEFAULT_FIRST_INDEX: usize = 0;

/// Default bytes per chunk
pub const DEFAULT_QUANTUM: usize = 4000;

/// Default chunks per segment
pub const DEFAULT_QSET: usize = 1000;

/// Main configuration for a scullstore device table
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Device Configuration
    // -------------------------------------------------------------------------
    /// Number of independent devices (one store each)
    pub device_count: usize,

    /// Index of the first device; devices occupy
    /// `first_index .. first_index + device_count`
    pub first_index: usize,

    // -------------------------------------------------------------------------
    // Store Layout Configuration
    // -------------------------------------------------------------------------
    /// Bytes per chunk
    pub quantum: usize,

    /// Chunks per segment
    pub qset: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device_count: DEFAULT_DEVICE_COUNT,
            first_index: DEFAULT_FIRST_INDEX,
            quantum: DEFAULT_QUANTUM,
            qset: DEFAULT_QSET,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The default store layout described by this config
    pub fn layout(&self) -> Result<Layout> {
        Layout::new(self.quantum, self.qset)
            .map_err(|e| ScullError::Config(format!("invalid store layout: {}", e)))
    }

    /// Check that the config describes a usable device table
    pub fn validate(&self) -> Result<()> {
        if self.device_count == 0 {
            return Err(ScullError::Config("device_count must be at least 1".to_string()));
        }

        if self.first_index.checked_add(self.device_count).is_none() {
            return Err(ScullError::Config(format!(
                "device range {} + {} overflows",
                self.first_index, self.device_count
            )));
        }

        self.layout().map(|_| ())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of devices
    pub fn device_count(mut self, count: usize) -> Self {
        self.config.device_count = count;
        self
    }

    /// Set the index of the first device
    pub fn first_index(mut self, index: usize) -> Self {
        self.config.first_index = index;
        self
    }

    /// Set the bytes per chunk
    pub fn quantum(mut self, quantum: usize) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Set the chunks per segment
    pub fn qset(mut self, qset: usize) -> Self {
        self.config.qset = qset;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
