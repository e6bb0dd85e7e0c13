//! Implicit node indexing for a perfect binary tree
//!
//! Root = 1, children of i = (2i, 2i+1), parent of i = i/2
//! Leaves occupy [leaf_count, 2·leaf_count)
//! Height = distance from the leaf level

use std::fmt;

/// Shape of a perfect binary tree over `leaf_count` leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeLayout {
    /// Number of leaves (a power of two, at least 1)
    leaf_count: usize,

    /// log2(leaf_count)
    height: u32,
}

impl TreeLayout {
    /// Smallest perfect layout holding `len` leaves (at least one).
    pub fn for_len(len: usize) -> Self {
        let leaf_count = len.max(1).next_power_of_two();
        Self {
            leaf_count,
            height: leaf_count.trailing_zeros(),
        }
    }

    /// Number of leaves.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Height of the root.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of node slots, including the unused slot 0.
    #[inline]
    pub fn node_slots(&self) -> usize {
        2 * self.leaf_count
    }

    /// Node index of leaf `index`.
    #[inline]
    pub fn leaf(&self, index: usize) -> usize {
        debug_assert!(index < self.leaf_count, "leaf {} outside layout", index);
        index + self.leaf_count
    }

    /// Internal nodes are the only ones that may hold a pending update.
    #[inline]
    pub fn is_internal(&self, node: usize) -> bool {
        node < self.leaf_count
    }

    /// Ancestor `distance` levels above `node`.
    #[inline]
    pub fn ancestor(node: usize, distance: u32) -> usize {
        node >> distance
    }

    /// Left and right child of an internal node.
    #[inline]
    pub fn children(node: usize) -> (usize, usize) {
        (2 * node, 2 * node + 1)
    }
}

impl fmt::Display for TreeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leaves, height {}", self.leaf_count, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_count_rounds_up() {
        assert_eq!(TreeLayout::for_len(0).leaf_count(), 1);
        assert_eq!(TreeLayout::for_len(1).leaf_count(), 1);
        assert_eq!(TreeLayout::for_len(5).leaf_count(), 8);
        assert_eq!(TreeLayout::for_len(8).leaf_count(), 8);
        assert_eq!(TreeLayout::for_len(9).leaf_count(), 16);
    }

    #[test]
    fn test_height_is_log2() {
        assert_eq!(TreeLayout::for_len(1).height(), 0);
        assert_eq!(TreeLayout::for_len(2).height(), 1);
        assert_eq!(TreeLayout::for_len(100).height(), 7);
    }

    #[test]
    fn test_every_leaf_reaches_root() {
        let layout = TreeLayout::for_len(16);
        for index in 0..layout.leaf_count() {
            let leaf = layout.leaf(index);
            assert!(!layout.is_internal(leaf));
            assert_eq!(TreeLayout::ancestor(leaf, layout.height()), 1);
        }
    }

    #[test]
    fn test_children_are_parent_inverse() {
        for node in 1..64 {
            let (left, right) = TreeLayout::children(node);
            assert_eq!(TreeLayout::ancestor(left, 1), node);
            assert_eq!(TreeLayout::ancestor(right, 1), node);
            assert_eq!(left + 1, right);
        }
    }
}
