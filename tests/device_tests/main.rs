//! Device Tests
//!
//! Tests for the device table, handles and their io adapters.
