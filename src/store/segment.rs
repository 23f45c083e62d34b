//! Segments and chunks
//!
//! A [`Segment`] owns up to `qset` chunk slots. The slot table is only
//! allocated when the first chunk in the segment is written.

use crate::error::{Result, ScullError};

/// One fixed-size allocation unit of `quantum` bytes
#[derive(Debug)]
pub(crate) struct Chunk {
    data: Box<[u8]>,
}

impl Chunk {
    /// Allocate a zeroed chunk, reporting allocation failure instead of aborting
    pub(crate) fn try_new(quantum: usize) -> Result<Self> {
        let mut data: Vec<u8> = Vec::new();
        data.try_reserve_exact(quantum)
            .map_err(|_| ScullError::OutOfMemory { what: "chunk bytes", count: quantum })?;
        data.resize(quantum, 0);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// A node of the storage chain holding `qset` chunk slots
#[derive(Debug, Default)]
pub(crate) struct Segment {
    /// Empty until the first chunk is allocated, then exactly `qset` long
    slots: Vec<Option<Chunk>>,
}

impl Segment {
    /// Create a segment with no slot table
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The chunk at `index`, if allocated
    pub(crate) fn chunk(&self, index: usize) -> Option<&Chunk> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// The chunk at `index`, allocating the slot table and the chunk if absent
    ///
    /// On failure nothing is marked allocated.
    pub(crate) fn chunk_or_alloc(&mut self, index: usize, quantum: usize, qset: usize) -> Result<&mut Chunk> {
        if index >= qset {
            return Err(ScullError::InvalidArgument(format!(
                "chunk index {} out of qset {}",
                index, qset
            )));
        }
        if !self.slots.is_empty() && self.slots.len() != qset {
            return Err(ScullError::InvalidArgument(format!(
                "qset {} does not match slot table of {}",
                qset,
                self.slots.len()
            )));
        }

        if self.slots.is_empty() {
            let mut slots: Vec<Option<Chunk>> = Vec::new();
            slots.try_reserve_exact(qset).map_err(|_| ScullError::OutOfMemory {
                what: "chunk slots",
                count: qset,
            })?;
            slots.resize_with(qset, || None);
            self.slots = slots;
            tracing::trace!("Allocated slot table of {} entries", qset);
        }

        let slot = &mut self.slots[index];
        let chunk = match slot.take() {
            Some(chunk) => chunk,
            None => Chunk::try_new(quantum)?,
        };

        Ok(slot.insert(chunk))
    }

    /// Number of allocated chunks in this segment
    pub(crate) fn allocated_chunks(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
