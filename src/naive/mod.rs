//! Brute-force reference model
//!
//! A plain vector with the same contract as the trees: every update and
//! fold touches each element in the range, O(n) per call. Differential
//! tests and the stress runner compare trees against it.

use std::fmt;

use crate::algebra::{Action, Monoid};
use crate::tree::{check_index, check_range};
use crate::SegTreeError;

/// Flat array of monoid elements.
pub struct NaiveArray<M: Monoid> {
    values: Vec<M::Item>,
}

impl<M: Monoid> NaiveArray<M> {
    /// `len` identity elements.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![M::identity(); len],
        }
    }

    /// Array holding exactly `values`.
    pub fn from_vec(values: Vec<M::Item>) -> Self {
        Self { values }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the array is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element `index`.
    pub fn get(&self, index: usize) -> Result<&M::Item, SegTreeError> {
        check_index(index, self.values.len())?;
        Ok(&self.values[index])
    }

    /// Apply `update` to each element of `[left, right]` as a single leaf.
    pub fn apply_range<A>(&mut self, left: usize, right: usize, update: &A) -> Result<(), SegTreeError>
    where
        A: Action<M>,
    {
        check_range(left, right, self.values.len())?;
        for value in &mut self.values[left..=right] {
            *value = update.apply(value, 0);
        }
        Ok(())
    }

    /// Left-to-right fold of `[left, right]`.
    pub fn fold(&self, left: usize, right: usize) -> Result<M::Item, SegTreeError> {
        check_range(left, right, self.values.len())?;
        Ok(self.values[left..=right]
            .iter()
            .fold(M::identity(), |acc, value| M::op(&acc, value)))
    }

    /// All elements.
    pub fn as_slice(&self) -> &[M::Item] {
        &self.values
    }
}

impl<M> fmt::Debug for NaiveArray<M>
where
    M: Monoid,
    M::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.values).finish()
    }
}
