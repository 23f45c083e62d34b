//! Open device handles
//!
//! A handle is one open of a device: it holds the store, the access mode and
//! a file position.

use std::io;
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::error::{Result, ScullError};
use crate::store::{SegmentedStore, Whence};

/// Access mode requested at open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    ReadOnly,

    /// Resets the device on open
    WriteOnly,

    ReadWrite,
}

impl OpenMode {
    pub fn can_read(self) -> bool {
        matches!(self, OpenMode::ReadOnly | OpenMode::ReadWrite)
    }

    pub fn can_write(self) -> bool {
        matches!(self, OpenMode::WriteOnly | OpenMode::ReadWrite)
    }
}

/// An open device with its own position
pub struct Handle {
    device: usize,
    mode: OpenMode,
    store: Arc<RwLock<SegmentedStore>>,
    position: u64,
}

impl Handle {
    pub(crate) fn new(device: usize, mode: OpenMode, store: Arc<RwLock<SegmentedStore>>) -> Self {
        Self {
            device,
            mode,
            store,
            position: 0,
        }
    }

    /// Read up to `max_len` bytes at the current position and advance it
    ///
    /// At most one chunk is returned per call. Empty means end-of-data.
    pub fn read(&mut self, max_len: usize) -> Result<Bytes> {
        self.check_readable()?;
        let (data, next) = self.store.read().read(self.position, max_len);
        self.position = next;
        Ok(data)
    }

    /// Read up to `max_len` bytes at `offset` without moving the position
    pub fn read_at(&self, offset: u64, max_len: usize) -> Result<Bytes> {
        self.check_readable()?;
        Ok(self.store.read().read(offset, max_len).0)
    }

    /// Write at the current position and advance it
    ///
    /// Returns how many bytes were taken, which is less than `data.len()`
    /// when `data` runs past the end of the current chunk.
    pub fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.check_writable()?;
        let (written, next) = self.store.write().write(self.position, data)?;
        self.position = next;
        Ok(written)
    }

    /// Write at `offset` without moving the position
    pub fn write_at(&self, offset: u64, data: &[u8]) -> Result<usize> {
        self.check_writable()?;
        Ok(self.store.write().write(offset, data)?.0)
    }

    /// Write all of `data` at the current position
    ///
    /// The store lock is held across the whole loop.
    pub fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.check_writable()?;
        let mut store = self.store.write();
        let mut remaining = data;
        while !remaining.is_empty() {
            let (written, next) = store.write(self.position, remaining)?;
            remaining = &remaining[written..];
            self.position = next;
        }
        Ok(())
    }

    /// Move the position; returns the new position
    pub fn seek(&mut self, delta: i64, whence: Whence) -> Result<u64> {
        self.position = self.store.read().seek(self.position, delta, whence)?;
        Ok(self.position)
    }

    /// Release the device's contents
    pub fn trim(&self) -> Result<()> {
        self.check_writable()?;
        self.store.write().trim();
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn device(&self) -> usize {
        self.device
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    /// Current end-of-data of the device
    pub fn size(&self) -> u64 {
        self.store.read().size()
    }

    fn check_readable(&self) -> Result<()> {
        if self.mode.can_read() {
            Ok(())
        } else {
            Err(ScullError::PermissionDenied(format!(
                "device {} is not open for reading",
                self.device
            )))
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.mode.can_write() {
            Ok(())
        } else {
            Err(ScullError::PermissionDenied(format!(
                "device {} is not open for writing",
                self.device
            )))
        }
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("device", &self.device)
            .field("mode", &self.mode)
            .field("position", &self.position)
            .finish()
    }
}

// =============================================================================
// std::io adapters
// =============================================================================

impl io::Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.check_readable()?;
        let read = self.store.read().read_at(self.position, buf);
        self.position += read as u64;
        Ok(read)
    }
}

impl io::Write for Handle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Handle::write(self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl io::Seek for Handle {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        match pos {
            io::SeekFrom::Start(offset) => {
                self.position = offset;
                Ok(offset)
            }
            io::SeekFrom::Current(delta) => Ok(Handle::seek(self, delta, Whence::Current)?),
            io::SeekFrom::End(delta) => Ok(Handle::seek(self, delta, Whence::End)?),
        }
    }
}
