//! # Lazy Segment Trees over Monoid Actions
//!
//! Array-backed segment trees for contest-style range problems.
//!
//! ## Core Structure
//!
//! [`LazySegmentTree`] stores elements of a [`Monoid`] and supports, in
//! O(log n) each:
//! 1. **Range update**: apply an [`Action`] (e.g. "add 5", "set to 0") to
//!    every element of `[left, right]`
//! 2. **Range fold**: `op` over `[left, right]`, left to right
//!
//! Updates are deferred: a node keeps one pending update, already reflected
//! in its own aggregate but not yet in its children, and hands it down only
//! when a later operation walks through it.
//!
//! ## Usage Example
//!
//! ```
//! use lazy_segtree::{Sum, Update, UpdateTree};
//!
//! let mut tree = UpdateTree::<Sum>::new(8);
//! tree.update(0, 3, Update::Accumulate(2))?;
//! assert_eq!(tree.query(0, 7)?, 8);
//!
//! tree.update(2, 5, Update::Overwrite(10))?;
//! assert_eq!(tree.query(2, 5)?, 40);
//! # Ok::<(), lazy_segtree::SegTreeError>(())
//! ```
//!
//! [`SegmentTree`] and [`DeltaSegmentTree`] cover point updates, and
//! [`stress`] checks any [`RepeatMonoid`] against the brute-force
//! [`NaiveArray`].

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // Monoid and action contracts
pub mod naive; // Brute-force reference
pub mod script; // Command scripts for the CLI
pub mod stress; // Differential stress runner
pub mod tree; // Segment trees

// Re-exports for convenience
pub use algebra::{Action, Max, Min, Monoid, RepeatMonoid, Sum, Update};
pub use naive::NaiveArray;
pub use stress::{StressConfig, StressError, StressReport};
pub use tree::{DeltaSegmentTree, LazySegmentTree, SegmentTree, UpdateTree};

use thiserror::Error;

/// Errors raised by tree operations
///
/// All of them are caller bugs; the tree is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegTreeError {
    /// Index outside `[0, len)`
    #[error("index {index} out of range for {len} leaves")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Number of addressable leaves
        len: usize,
    },

    /// Range whose left end exceeds its right end
    #[error("invalid range [{left}, {right}]: left end exceeds right end")]
    InvertedRange {
        /// Left end
        left: usize,
        /// Right end
        right: usize,
    },

    /// More initial values than leaves
    #[error("{given} initial values exceed capacity of {capacity} leaves")]
    TooManyValues {
        /// Number of values supplied
        given: usize,
        /// Number of leaves available
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let err = SegTreeError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "index 9 out of range for 8 leaves");

        let err = SegTreeError::InvertedRange { left: 4, right: 1 };
        assert!(err.to_string().contains("[4, 1]"));
    }

    #[test]
    fn test_reexports_compose() {
        let mut tree = UpdateTree::<Max>::from_vec(vec![3, 1, 4, 1]);
        tree.update(0, 1, Update::Accumulate(2)).unwrap();
        assert_eq!(tree.query(0, 1).unwrap(), 3);
        assert_eq!(tree.fold_all(), 4);
    }
}
