//! Lazy segment tree over a monoid action
//!
//! Pending updates live on internal nodes only. A pending update has
//! already been applied to its node's aggregate but not yet to either
//! child. `push` hands pending updates down a root-to-leaf path before
//! the path is read or modified; `pull` repairs aggregates on the way
//! back up after children change.
//!
//! Composition order is `newer.compose(&older)` everywhere.

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use super::{check_range, CanonicalSegments, Side, TreeLayout};
use crate::algebra::{Action, Monoid, Update};
use crate::SegTreeError;

/// Range update + range fold in O(log n).
///
/// `M` is the stored monoid, `A` the update action on it.
pub struct LazySegmentTree<M: Monoid, A> {
    /// Requested number of elements
    len: usize,

    layout: TreeLayout,

    /// Aggregate per node, indices [1, 2·leaf_count)
    aggregates: Vec<M::Item>,

    /// Pending update per internal node, indices [1, leaf_count)
    pending: Vec<A>,
}

/// Lazy tree driven by the kind-aware [`Update`] action.
pub type UpdateTree<M> = LazySegmentTree<M, Update<<M as Monoid>::Item>>;

impl<M, A> LazySegmentTree<M, A>
where
    M: Monoid,
    A: Action<M>,
{
    /// Tree over `len` elements, all set to the identity.
    pub fn new(len: usize) -> Self {
        let layout = TreeLayout::for_len(len);
        debug!(len, %layout, "building lazy segment tree");

        Self {
            len,
            layout,
            aggregates: vec![M::identity(); layout.node_slots()],
            pending: vec![A::identity(); layout.leaf_count()],
        }
    }

    /// Tree over `len` elements seeded with up to `leaf_count` values.
    pub fn with_leaves<I>(len: usize, values: I) -> Result<Self, SegTreeError>
    where
        I: IntoIterator<Item = M::Item>,
    {
        let mut tree = Self::new(len);
        tree.set_leaves(values)?;
        Ok(tree)
    }

    /// Tree over exactly the given values.
    pub fn from_vec(values: Vec<M::Item>) -> Self {
        let mut tree = Self::new(values.len());
        let capacity = tree.layout.leaf_count();
        tree.aggregates[capacity..capacity + values.len()].clone_from_slice(&values);
        tree.rebuild();
        tree
    }

    /// Re-seed the leaves in O(n).
    ///
    /// Leaves past the supplied values are reset to the identity and every
    /// pending update is dropped. Fails without touching the tree when more
    /// than `leaf_count` values are supplied.
    pub fn set_leaves<I>(&mut self, values: I) -> Result<(), SegTreeError>
    where
        I: IntoIterator<Item = M::Item>,
    {
        let capacity = self.layout.leaf_count();
        let mut values = values.into_iter();
        let mut leaves: Vec<M::Item> = values.by_ref().take(capacity).collect();

        let extra = values.count();
        if extra > 0 {
            return Err(SegTreeError::TooManyValues {
                given: capacity + extra,
                capacity,
            });
        }

        leaves.resize(capacity, M::identity());
        self.aggregates[capacity..].clone_from_slice(&leaves);
        self.pending.fill(A::identity());
        self.rebuild();
        Ok(())
    }

    /// Requested number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree was built for zero elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaves; valid indices are `0..leaf_count()`.
    pub fn leaf_count(&self) -> usize {
        self.layout.leaf_count()
    }

    /// Height of the root above the leaves.
    pub fn height(&self) -> u32 {
        self.layout.height()
    }

    /// Apply `update` to every element in `[left, right]`.
    pub fn update(&mut self, left: usize, right: usize, update: A) -> Result<(), SegTreeError> {
        check_range(left, right, self.layout.leaf_count())?;
        trace!(left, right, "range update");

        let first = self.layout.leaf(left);
        let last = self.layout.leaf(right);

        // Stale ancestor updates must land before the new one.
        self.push(first);
        self.push(last);

        for segment in CanonicalSegments::new(first, last) {
            self.apply_at(segment.node, segment.height, &update);
        }

        self.pull(first);
        self.pull(last);
        Ok(())
    }

    /// Fold of `[left, right]`, left to right.
    pub fn query(&mut self, left: usize, right: usize) -> Result<M::Item, SegTreeError> {
        check_range(left, right, self.layout.leaf_count())?;
        trace!(left, right, "range query");

        let first = self.layout.leaf(left);
        let last = self.layout.leaf(right);
        self.push(first);
        self.push(last);

        let mut acc_left = M::identity();
        let mut acc_right = M::identity();
        for segment in CanonicalSegments::new(first, last) {
            let value = &self.aggregates[segment.node];
            match segment.side {
                Side::Left => acc_left = M::op(&acc_left, value),
                Side::Right => acc_right = M::op(value, &acc_right),
            }
        }

        Ok(M::op(&acc_left, &acc_right))
    }

    /// Logical value of one element.
    pub fn get(&mut self, index: usize) -> Result<M::Item, SegTreeError> {
        self.query(index, index)
    }

    /// Fold over every leaf.
    pub fn fold_all(&self) -> M::Item {
        self.aggregates[1].clone()
    }

    fn rebuild(&mut self) {
        for node in (1..self.layout.leaf_count()).rev() {
            let (left, right) = TreeLayout::children(node);
            self.aggregates[node] = M::op(&self.aggregates[left], &self.aggregates[right]);
        }
    }

    fn apply_at(&mut self, node: usize, height: u32, update: &A) {
        self.aggregates[node] = update.apply(&self.aggregates[node], height);
        if self.layout.is_internal(node) {
            self.pending[node] = update.compose(&self.pending[node]);
        }
    }

    fn push(&mut self, leaf: usize) {
        for distance in (1..=self.layout.height()).rev() {
            let node = TreeLayout::ancestor(leaf, distance);
            if self.pending[node].is_identity() {
                continue;
            }

            let update = mem::replace(&mut self.pending[node], A::identity());
            let (left, right) = TreeLayout::children(node);
            self.apply_at(left, distance - 1, &update);
            self.apply_at(right, distance - 1, &update);
        }
    }

    fn pull(&mut self, leaf: usize) {
        for distance in 1..=self.layout.height() {
            let node = TreeLayout::ancestor(leaf, distance);
            let (left, right) = TreeLayout::children(node);
            let combined = M::op(&self.aggregates[left], &self.aggregates[right]);
            self.aggregates[node] = self.pending[node].apply(&combined, distance);
        }
    }
}

impl<M, A> fmt::Debug for LazySegmentTree<M, A>
where
    M: Monoid,
    M::Item: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySegmentTree")
            .field("len", &self.len)
            .field("layout", &self.layout)
            .field("aggregates", &self.aggregates)
            .field("pending", &self.pending)
            .finish()
    }
}
