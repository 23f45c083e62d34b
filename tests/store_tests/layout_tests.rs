//! Layout Tests
//!
//! Tests verify:
//! - Layout validation
//! - Offset to (segment, chunk, byte) translation
//! - Seek whence parsing

use scullstore::store::{Layout, Whence};
use scullstore::ScullError;

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_layout_accessors() {
    let layout = Layout::new(4, 2).unwrap();

    assert_eq!(layout.quantum(), 4);
    assert_eq!(layout.qset(), 2);
    assert_eq!(layout.item_size(), 8);
}

#[test]
fn test_layout_rejects_zero_quantum() {
    let result = Layout::new(0, 10);
    assert!(matches!(result, Err(ScullError::InvalidArgument(_))));
}

#[test]
fn test_layout_rejects_zero_qset() {
    let result = Layout::new(10, 0);
    assert!(matches!(result, Err(ScullError::InvalidArgument(_))));
}

#[test]
fn test_layout_rejects_overflowing_segment_size() {
    let result = Layout::new(usize::MAX, 2);
    assert!(matches!(result, Err(ScullError::InvalidArgument(_))));
}

// =============================================================================
// Translation Tests
// =============================================================================

#[test]
fn test_locate_start_of_store() {
    let layout = Layout::new(4, 2).unwrap();
    let loc = layout.locate(0);

    assert_eq!(loc.segment, 0);
    assert_eq!(loc.chunk, 0);
    assert_eq!(loc.byte, 0);
    assert_eq!(loc.chunk_remaining(), 4);
}

#[test]
fn test_locate_within_second_chunk() {
    let layout = Layout::new(4, 2).unwrap();
    let loc = layout.locate(6);

    assert_eq!(loc.segment, 0);
    assert_eq!(loc.chunk, 1);
    assert_eq!(loc.byte, 2);
    assert_eq!(loc.chunk_remaining(), 2);
}

#[test]
fn test_locate_segment_boundary() {
    let layout = Layout::new(4, 2).unwrap();

    let before = layout.locate(7);
    assert_eq!((before.segment, before.chunk, before.byte), (0, 1, 3));

    let after = layout.locate(8);
    assert_eq!((after.segment, after.chunk, after.byte), (1, 0, 0));
}

#[test]
fn test_locate_far_offset() {
    let layout = Layout::new(4, 2).unwrap();
    let loc = layout.locate(100);

    assert_eq!(loc.segment, 12);
    assert_eq!(loc.chunk, 1);
    assert_eq!(loc.byte, 0);
}

#[test]
fn test_locate_default_layout() {
    let layout = Layout::new(4000, 1000).unwrap();
    let loc = layout.locate(4_000_000 + 8_123);

    assert_eq!(loc.segment, 1);
    assert_eq!(loc.chunk, 2);
    assert_eq!(loc.byte, 123);
    assert_eq!(loc.chunk_remaining(), 3877);
}

// =============================================================================
// Whence Tests
// =============================================================================

#[test]
fn test_whence_from_raw_values() {
    assert_eq!(Whence::try_from(0).unwrap(), Whence::Set);
    assert_eq!(Whence::try_from(1).unwrap(), Whence::Current);
    assert_eq!(Whence::try_from(2).unwrap(), Whence::End);
}

#[test]
fn test_whence_rejects_unknown_values() {
    assert!(matches!(Whence::try_from(3), Err(ScullError::InvalidArgument(_))));
    assert!(matches!(Whence::try_from(-1), Err(ScullError::InvalidArgument(_))));
}
