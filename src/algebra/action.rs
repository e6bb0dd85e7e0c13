//! Kind-aware range update
//!
//! Overwrite(x): every covered leaf becomes x
//! Accumulate(x): every covered leaf becomes op(leaf, x)
//!
//! Composition is not commutative. An overwrite discards everything
//! composed before it; an accumulate folds into whatever came before.

use super::{leaves_at, Action, RepeatMonoid};

/// Range update over a [`RepeatMonoid`] with item type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Update<T> {
    /// Leave every element unchanged.
    #[default]
    NoOp,

    /// Set every element to the constant.
    Overwrite(T),

    /// Combine the constant into every element via `op`.
    ///
    /// Two accumulates fold their constants together, which is only
    /// sound when `op` commutes with itself over the values involved
    /// (sum, max, min).
    Accumulate(T),
}

impl<T> Update<T> {
    /// Whether this is [`Update::NoOp`].
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Update::NoOp)
    }
}

impl<M> Action<M> for Update<M::Item>
where
    M: RepeatMonoid,
{
    fn identity() -> Self {
        Update::NoOp
    }

    fn is_identity(&self) -> bool {
        self.is_noop()
    }

    fn apply(&self, value: &M::Item, height: u32) -> M::Item {
        match self {
            Update::NoOp => value.clone(),
            Update::Overwrite(x) => M::repeat(x, leaves_at(height)),
            Update::Accumulate(x) => M::op(value, &M::repeat(x, leaves_at(height))),
        }
    }

    fn compose(&self, older: &Self) -> Self {
        match (self, older) {
            (Update::NoOp, _) => older.clone(),
            (Update::Overwrite(_), _) | (_, Update::NoOp) => self.clone(),
            (Update::Accumulate(x), Update::Overwrite(y)) => Update::Overwrite(M::op(y, x)),
            (Update::Accumulate(x), Update::Accumulate(y)) => Update::Accumulate(M::op(y, x)),
        }
    }
}
