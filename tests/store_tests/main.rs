//! Store Tests
//!
//! Tests for the segmented store and its address translation.

mod layout_tests;
