//! Segment tree for incrementally mutated values
//!
//! Nodes hold large aggregates (maps, sets, histograms) that only ever
//! change by small in-place edits. A point edit is replayed on the leaf and
//! every ancestor; a range read visits the covering segments and lets the
//! caller combine them however it likes.
//!
//! The edit `f` must commute with the implicit combine: f(a)·b = f(a·b).

use std::fmt;

use super::{check_index, check_range, CanonicalSegments, TreeLayout};
use crate::SegTreeError;

/// Segment tree whose nodes are edited in place.
pub struct DeltaSegmentTree<T> {
    len: usize,
    nodes: Vec<T>,
}

impl<T: Clone> DeltaSegmentTree<T> {
    /// `len` leaves, every node starting as a copy of `identity`.
    pub fn new(len: usize, identity: T) -> Self {
        Self {
            len,
            nodes: vec![identity; 2 * len],
        }
    }
}

impl<T> DeltaSegmentTree<T> {
    /// Number of leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no leaves.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Run `edit` on leaf `index` and its O(log n) ancestors.
    pub fn update<F>(&mut self, index: usize, mut edit: F) -> Result<(), SegTreeError>
    where
        F: FnMut(&mut T),
    {
        check_index(index, self.len)?;

        let mut node = index + self.len;
        while node > 0 {
            edit(&mut self.nodes[node]);
            node = TreeLayout::ancestor(node, 1);
        }
        Ok(())
    }

    /// Call `visitor` on each of the O(log n) segments covering `[left, right]`.
    pub fn visit<F>(&self, left: usize, right: usize, mut visitor: F) -> Result<(), SegTreeError>
    where
        F: FnMut(&T),
    {
        check_range(left, right, self.len)?;

        for segment in CanonicalSegments::new(left + self.len, right + self.len) {
            visitor(&self.nodes[segment.node]);
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for DeltaSegmentTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeltaSegmentTree")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .finish()
    }
}
