//! Point-update segment tree
//!
//! v has 2n slots; leaves at [n, 2n), parent of i at i/2.
//! `set` rewrites a leaf and its O(log n) ancestors; `fold` combines the
//! canonical segments of a range. No padding: n need not be a power of two.

use std::fmt;

use super::{check_index, check_range, CanonicalSegments, Side, TreeLayout};
use crate::algebra::Monoid;
use crate::SegTreeError;

/// Segment tree with point assignment and range fold.
pub struct SegmentTree<M: Monoid> {
    len: usize,
    values: Vec<M::Item>,
}

impl<M: Monoid> SegmentTree<M> {
    /// `len` identity elements.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            values: vec![M::identity(); 2 * len],
        }
    }

    /// Tree over exactly the given values, built in O(n).
    pub fn from_vec(values: Vec<M::Item>) -> Self {
        let mut tree = Self::new(values.len());
        tree.values[tree.len..].clone_from_slice(&values);
        tree.rebuild();
        tree
    }

    /// Re-seed every leaf in O(n).
    ///
    /// Leaves past the supplied values are reset to the identity. Fails
    /// without touching the tree when more than `len` values are supplied.
    pub fn set_all<I>(&mut self, values: I) -> Result<(), SegTreeError>
    where
        I: IntoIterator<Item = M::Item>,
    {
        let mut values = values.into_iter();
        let mut leaves: Vec<M::Item> = values.by_ref().take(self.len).collect();
        let extra = values.count();
        if extra > 0 {
            return Err(SegTreeError::TooManyValues {
                given: self.len + extra,
                capacity: self.len,
            });
        }

        leaves.resize(self.len, M::identity());
        let start = self.len;
        self.values[start..].clone_from_slice(&leaves);
        self.rebuild();
        Ok(())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Set element `index` in O(log n).
    pub fn set(&mut self, index: usize, value: M::Item) -> Result<(), SegTreeError> {
        check_index(index, self.len)?;

        let mut node = index + self.len;
        self.values[node] = value;
        while node > 1 {
            node = TreeLayout::ancestor(node, 1);
            let (left, right) = TreeLayout::children(node);
            self.values[node] = M::op(&self.values[left], &self.values[right]);
        }
        Ok(())
    }

    /// Element `index`.
    pub fn get(&self, index: usize) -> Result<&M::Item, SegTreeError> {
        check_index(index, self.len)?;
        Ok(&self.values[index + self.len])
    }

    /// Fold over `[left, right]` in O(log n).
    pub fn fold(&self, left: usize, right: usize) -> Result<M::Item, SegTreeError> {
        check_range(left, right, self.len)?;

        let mut acc_left = M::identity();
        let mut acc_right = M::identity();
        for segment in CanonicalSegments::new(left + self.len, right + self.len) {
            let value = &self.values[segment.node];
            match segment.side {
                Side::Left => acc_left = M::op(&acc_left, value),
                Side::Right => acc_right = M::op(value, &acc_right),
            }
        }
        Ok(M::op(&acc_left, &acc_right))
    }

    fn rebuild(&mut self) {
        for node in (1..self.len).rev() {
            let (left, right) = TreeLayout::children(node);
            self.values[node] = M::op(&self.values[left], &self.values[right]);
        }
    }
}

impl<M> fmt::Debug for SegmentTree<M>
where
    M: Monoid,
    M::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("len", &self.len)
            .field("values", &self.values)
            .finish()
    }
}
