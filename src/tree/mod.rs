//! Array-backed segment trees
//!
//! All trees share the implicit heap layout of [`TreeLayout`] and the
//! bottom-up [`CanonicalSegments`] walk:
//! - [`LazySegmentTree`]: range update + range fold over a monoid action
//! - [`SegmentTree`]: point assignment + range fold
//! - [`DeltaSegmentTree`]: in-place point edits + segment visits
//!
//! Index arguments are 0-based and ranges are inclusive. Out-of-range or
//! inverted ranges are rejected with [`SegTreeError`], never clamped.

mod delta;
mod lazy;
mod node;
mod plain;
mod traversal;

pub use delta::DeltaSegmentTree;
pub use lazy::{LazySegmentTree, UpdateTree};
pub use node::TreeLayout;
pub use plain::SegmentTree;
pub use traversal::{CanonicalSegments, Segment, Side};

use crate::SegTreeError;

/// `index < len`
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SegTreeError> {
    if index >= len {
        return Err(SegTreeError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// `left <= right < len`
pub(crate) fn check_range(left: usize, right: usize, len: usize) -> Result<(), SegTreeError> {
    check_index(left, len)?;
    check_index(right, len)?;
    if left > right {
        return Err(SegTreeError::InvertedRange { left, right });
    }
    Ok(())
}
