//! # scullstore
//!
//! An in-memory, randomly-writable byte store addressed by device index:
//! - Sparse segment chain with lazily allocated fixed-size chunks
//! - Positional read/write/seek with at most one chunk per call
//! - Trim releases all storage and applies the default layout
//! - One reader-writer lock per device
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Devices                               │
//! │             (index → RwLock<SegmentedStore>)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ open(index, mode)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Handle                                │
//! │        (position, mode, io::Read / Write / Seek)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ SegmentedStore│
//!               │ (Layout, size)│
//!               └───────┬───────┘
//!                       │
//!          ┌────────────┼────────────┐
//!          ▼            ▼            ▼
//!     ┌─────────┐  ┌─────────┐  ┌─────────┐
//!     │Segment 0│  │Segment 1│  │Segment n│
//!     │ qset ×  │  │ qset ×  │  │ qset ×  │
//!     │ Chunk   │  │ Chunk   │  │ Chunk   │
//!     └─────────┘  └─────────┘  └─────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod device;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ScullError, Result};
pub use config::Config;
pub use device::{Devices, Handle, OpenMode};
pub use store::{Layout, SegmentedStore, Whence};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of scullstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
