//! Device table
//!
//! A fixed set of stores, indexed from `first_index`.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::error::{Result, ScullError};
use crate::store::{Layout, SegmentedStore, StoreStats};

use super::{Handle, OpenMode};

/// The set of devices created at startup
///
/// ## Concurrency:
/// - `stores`: fixed after construction, each entry has its own RwLock
/// - All methods use `&self`
pub struct Devices {
    /// Index of `stores[0]`
    first_index: usize,

    stores: Vec<Arc<RwLock<SegmentedStore>>>,
}

impl Devices {
    /// Create `config.device_count` empty stores using the configured layout
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let layout = config.layout()?;

        let stores = (0..config.device_count)
            .map(|_| Arc::new(RwLock::new(SegmentedStore::new(layout))))
            .collect();

        tracing::info!(
            devices = config.device_count,
            first_index = config.first_index,
            quantum = layout.quantum(),
            qset = layout.qset(),
            "Device table initialized"
        );

        Ok(Self {
            first_index: config.first_index,
            stores,
        })
    }

    /// Open device `index`
    ///
    /// Opening write-only releases the device's contents first.
    pub fn open(&self, index: usize, mode: OpenMode) -> Result<Handle> {
        let store = Arc::clone(self.store(index)?);

        if mode == OpenMode::WriteOnly {
            store.write().trim();
            tracing::debug!(device = index, "Reset device on write-only open");
        }

        Ok(Handle::new(index, mode, store))
    }

    /// Set the layout every device switches to on its next trim
    pub fn set_default_layout(&self, layout: Layout) {
        for store in &self.stores {
            store.write().set_default_layout(layout);
        }
    }

    /// Release the contents of every device
    pub fn trim_all(&self) {
        for store in &self.stores {
            store.write().trim();
        }
        tracing::debug!(devices = self.stores.len(), "Trimmed all devices");
    }

    /// Resource usage of device `index`
    pub fn stats(&self, index: usize) -> Result<StoreStats> {
        Ok(self.store(index)?.read().stats())
    }

    /// Valid device indices
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.first_index..self.first_index + self.stores.len()
    }

    /// Number of devices
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    fn store(&self, index: usize) -> Result<&Arc<RwLock<SegmentedStore>>> {
        index
            .checked_sub(self.first_index)
            .and_then(|slot| self.stores.get(slot))
            .ok_or(ScullError::NoSuchDevice(index))
    }
}
