//! Store layout and address translation
//!
//! Read and write both go through [`Layout::locate`]; there is no other
//! offset arithmetic in the store.

use crate::error::{Result, ScullError};

/// A validated (quantum, qset) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    quantum: usize,
    qset: usize,
}

/// Where a logical offset lives inside the segment chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Index of the segment in the chain
    pub segment: u64,

    /// Index of the chunk slot within the segment
    pub chunk: usize,

    /// Byte offset within the chunk
    pub byte: usize,

    quantum: usize,
}

impl Layout {
    /// Create a layout, rejecting zero sizes and overflowing segment sizes
    pub fn new(quantum: usize, qset: usize) -> Result<Self> {
        if quantum == 0 {
            return Err(ScullError::InvalidArgument("quantum must be non-zero".to_string()));
        }
        if qset == 0 {
            return Err(ScullError::InvalidArgument("qset must be non-zero".to_string()));
        }

        let item_size = quantum.checked_mul(qset).ok_or_else(|| {
            ScullError::InvalidArgument(format!(
                "segment size {} * {} overflows",
                quantum, qset
            ))
        })?;
        if u64::try_from(item_size).is_err() {
            return Err(ScullError::InvalidArgument(format!(
                "segment size {} does not fit in an offset",
                item_size
            )));
        }

        Ok(Self { quantum, qset })
    }

    /// Bytes per chunk
    pub fn quantum(&self) -> usize {
        self.quantum
    }

    /// Chunks per segment
    pub fn qset(&self) -> usize {
        self.qset
    }

    /// Bytes covered by one segment
    pub fn item_size(&self) -> u64 {
        // Checked in `new`.
        (self.quantum * self.qset) as u64
    }

    /// Translate a logical offset into its chain location
    pub fn locate(&self, offset: u64) -> Location {
        let item_size = self.item_size();
        let quantum = self.quantum as u64;

        let segment = offset / item_size;
        let rest = offset % item_size;

        Location {
            segment,
            // Both values are below qset / quantum, which are usize.
            chunk: (rest / quantum) as usize,
            byte: (rest % quantum) as usize,
            quantum: self.quantum,
        }
    }
}

impl Location {
    /// Bytes left in the chunk from this location to its boundary
    pub fn chunk_remaining(&self) -> usize {
        self.quantum - self.byte
    }
}
