//! Store Module
//!
//! The segmented in-memory byte store.
//!
//! ## Responsibilities
//! - Translate logical offsets into (segment, chunk, byte) locations
//! - Lazily allocate segments and chunks on write
//! - Bound reads by the logical end-of-data (`size`)
//! - Release everything on trim
//!
//! ## Layout
//! ```text
//!  segments[0]                 segments[1]                 segments[n]
//! ┌──────────────────────┐    ┌──────────────────────┐    ┌──────────
//! │ slot 0 → [quantum B] │    │ slot 0 → (absent)    │    │ ...
//! │ slot 1 → [quantum B] │ →  │ slot 1 → [quantum B] │ →  │
//! │ ...      (qset slots)│    │ ...                  │    │
//! └──────────────────────┘    └──────────────────────┘    └──────────
//! ```
//!
//! A single read or write never crosses a chunk boundary; callers loop.

mod layout;
mod segment;
mod segmented;
mod seek;

pub use layout::{Layout, Location};
pub(crate) use segment::{Chunk, Segment};
pub use segmented::{SegmentedStore, StoreStats};
pub use seek::Whence;
