//! Seek origins
//!
//! Mirrors the classic `SEEK_SET` / `SEEK_CUR` / `SEEK_END` values.

use crate::error::{Result, ScullError};

/// How a seek delta is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Whence {
    /// Absolute offset
    Set = 0,

    /// Relative to the current offset
    Current = 1,

    /// Relative to the end of data (`size`)
    End = 2,
}

impl TryFrom<i32> for Whence {
    type Error = ScullError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Whence::Set),
            1 => Ok(Whence::Current),
            2 => Ok(Whence::End),
            other => Err(ScullError::InvalidArgument(format!(
                "unrecognized seek whence: {}",
                other
            ))),
        }
    }
}

/// Resolve a seek to a new absolute offset
///
/// The result must be non-negative and fit in `u64`; anything past `size` is
/// legal and positions a later write that extends the store.
pub(crate) fn resolve(current: u64, size: u64, delta: i64, whence: Whence) -> Result<u64> {
    let base = match whence {
        Whence::Set => 0,
        Whence::Current => current,
        Whence::End => size,
    };

    base.checked_add_signed(delta).ok_or_else(|| {
        ScullError::InvalidArgument(format!(
            "seek to {} {:+} is out of range",
            base, delta
        ))
    })
}
