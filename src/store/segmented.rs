//! Segmented store implementation
//!
//! Owns the segment chain and the size accounting. Not internally locked:
//! reads take `&self`, writes and trims take `&mut self`.

use bytes::Bytes;

use crate::error::{Result, ScullError};
use super::seek::{self, Whence};
use super::{Layout, Location, Segment};

/// An in-memory byte stream stored as a chain of lazily allocated segments
///
/// ## Invariants
/// - `size` is the highest offset ever written (exclusive) since the last trim
/// - every segment up to the last one written exists (no gaps in the chain)
/// - `layout` only changes on trim, when it is reset to `default_layout`
#[derive(Debug)]
pub struct SegmentedStore {
    /// Segment chain, indexed by segment number
    segments: Vec<Segment>,

    /// Layout in effect for the current contents
    layout: Layout,

    /// Layout applied on the next trim
    default_layout: Layout,

    /// Logical end-of-data offset
    size: u64,
}

/// Point-in-time view of a store's resource usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub size: u64,
    pub segments: usize,
    pub allocated_chunks: usize,
    pub allocated_bytes: usize,
    pub layout: Layout,
}

impl SegmentedStore {
    /// Create an empty store using `layout` now and on every trim
    pub fn new(layout: Layout) -> Self {
        Self {
            segments: Vec::new(),
            layout,
            default_layout: layout,
            size: 0,
        }
    }

    /// Read up to `max_len` bytes at `offset`
    ///
    /// Returns the bytes and the offset just past them. A read never crosses a
    /// chunk boundary, so the result may be shorter than requested even below
    /// end-of-data. An empty result at or past `size` is end-of-data.
    pub fn read(&self, offset: u64, max_len: usize) -> (Bytes, u64) {
        match self.readable(offset, max_len) {
            Some(bytes) => {
                let data = Bytes::copy_from_slice(bytes);
                let new_offset = offset + data.len() as u64;
                (data, new_offset)
            }
            None => (Bytes::new(), offset),
        }
    }

    /// Read into `buf` at `offset`, returning the number of bytes copied
    ///
    /// Same bounds as [`SegmentedStore::read`] with `max_len = buf.len()`.
    pub fn read_at(&self, offset: u64, buf: &mut [u8]) -> usize {
        match self.readable(offset, buf.len()) {
            Some(bytes) => {
                buf[..bytes.len()].copy_from_slice(bytes);
                bytes.len()
            }
            None => 0,
        }
    }

    /// The slice a read of `max_len` at `offset` would return, if any
    fn readable(&self, offset: u64, max_len: usize) -> Option<&[u8]> {
        if offset >= self.size || max_len == 0 {
            return None;
        }

        let loc = self.layout.locate(offset);

        let Some(chunk) = self.chunk_at(&loc) else {
            tracing::debug!(
                offset,
                size = self.size,
                segment = loc.segment,
                chunk = loc.chunk,
                "Short read: no chunk allocated below end of data"
            );
            return None;
        };

        // Clamp to end-of-data, then to the chunk boundary.
        let to_end = self.size - offset;
        let len = (max_len as u64).min(to_end) as usize;
        let len = len.min(loc.chunk_remaining());

        tracing::trace!(offset, len, "read");
        Some(&chunk.as_slice()[loc.byte..loc.byte + len])
    }

    fn chunk_at(&self, loc: &Location) -> Option<&super::Chunk> {
        let index = usize::try_from(loc.segment).ok()?;
        self.segments.get(index)?.chunk(loc.chunk)
    }

    /// Write as much of `data` at `offset` as fits in the target chunk
    ///
    /// Returns the number of bytes written and the offset just past them.
    /// Callers must loop to write more than the remainder of one chunk.
    ///
    /// On allocation failure the store keeps every segment created so far, no
    /// slot is marked allocated, and `size` is unchanged.
    pub fn write(&mut self, offset: u64, data: &[u8]) -> Result<(usize, u64)> {
        if offset.checked_add(data.len() as u64).is_none() {
            return Err(ScullError::InvalidArgument(format!(
                "write of {} bytes at offset {} overflows",
                data.len(),
                offset
            )));
        }
        if data.is_empty() {
            return Ok((0, offset));
        }

        let layout = self.layout;
        let loc = layout.locate(offset);

        let segment = self.segment_or_extend(loc.segment)?;
        let chunk = segment.chunk_or_alloc(loc.chunk, layout.quantum(), layout.qset())?;

        let len = data.len().min(loc.chunk_remaining());
        chunk.as_mut_slice()[loc.byte..loc.byte + len].copy_from_slice(&data[..len]);

        let new_offset = offset + len as u64;
        self.size = self.size.max(new_offset);

        tracing::trace!(offset, len, size = self.size, "write");
        Ok((len, new_offset))
    }

    /// Write all of `data` at `offset`, one chunk at a time
    ///
    /// Returns the offset just past the data. If an allocation fails partway
    /// the bytes already written stay written.
    pub fn write_all(&mut self, mut offset: u64, mut data: &[u8]) -> Result<u64> {
        while !data.is_empty() {
            let (written, next) = self.write(offset, data)?;
            data = &data[written..];
            offset = next;
        }
        Ok(offset)
    }

    /// The segment at `index`, creating it and every segment before it
    fn segment_or_extend(&mut self, index: u64) -> Result<&mut Segment> {
        let index = usize::try_from(index).map_err(|_| {
            ScullError::InvalidArgument(format!("segment index {} out of range", index))
        })?;

        if index >= self.segments.len() {
            let missing = index + 1 - self.segments.len();
            self.segments.try_reserve(missing).map_err(|_| ScullError::OutOfMemory {
                what: "segments",
                count: missing,
            })?;
            self.segments.resize_with(index + 1, Segment::new);
            tracing::debug!(segments = self.segments.len(), "Extended segment chain");
        }

        Ok(&mut self.segments[index])
    }

    /// Release every segment and chunk and reset to the default layout
    pub fn trim(&mut self) {
        let released = self.segments.len();
        self.segments = Vec::new();
        self.size = 0;
        self.layout = self.default_layout;

        tracing::debug!(
            released_segments = released,
            quantum = self.layout.quantum(),
            qset = self.layout.qset(),
            "Trimmed store"
        );
    }

    /// Compute a new offset from `current`, `delta` and `whence`
    ///
    /// Seeking past `size` is allowed.
    pub fn seek(&self, current: u64, delta: i64, whence: Whence) -> Result<u64> {
        seek::resolve(current, self.size, delta, whence)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the layout applied by the next trim
    ///
    /// The current contents keep their layout until then.
    pub fn set_default_layout(&mut self, layout: Layout) {
        self.default_layout = layout;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Logical end-of-data offset
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Layout in effect for the current contents
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Layout applied by the next trim
    pub fn default_layout(&self) -> Layout {
        self.default_layout
    }

    /// Number of segments in the chain
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of allocated chunks across all segments
    pub fn allocated_chunks(&self) -> usize {
        self.segments.iter().map(Segment::allocated_chunks).sum()
    }

    pub fn stats(&self) -> StoreStats {
        let allocated_chunks = self.allocated_chunks();
        StoreStats {
            size: self.size,
            segments: self.segments.len(),
            allocated_chunks,
            allocated_bytes: allocated_chunks * self.layout.quantum(),
            layout: self.layout,
        }
    }
}
