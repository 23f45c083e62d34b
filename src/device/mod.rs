//! Device Module
//!
//! Maps device indices to stores and adapts caller buffers to them.
//!
//! ## Responsibilities
//! - Build one store per device from the process-wide [`Config`](crate::Config)
//! - Open handles, trimming the store on write-only open
//! - Track a file position per handle
//! - Expose handles through `std::io::{Read, Write, Seek}`
//!
//! ## Concurrency
//! Each store sits behind its own `parking_lot::RwLock`: reads share it,
//! writes and trims hold it exclusively for the whole walk-and-mutate.
//! Devices never coordinate with each other.

mod handle;
mod table;

pub use handle::{Handle, OpenMode};
pub use table::Devices;
