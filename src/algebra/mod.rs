//! Algebraic contracts for segment tree contents
//!
//! A tree stores elements of a [`Monoid`] and folds them with `op`.
//! Range updates are elements of an [`Action`] on that monoid:
//! - `apply` transforms the aggregate of a node covering `2^height` leaves
//! - `compose` collapses two pending updates into one
//!
//! Neither law is checked at runtime. A non-associative `op` or an action
//! that does not distribute over `op` silently yields wrong aggregates.

mod action;
mod monoid;

pub use action::Update;
pub use monoid::{Max, Min, Sum};

/// Associative operation with an identity element.
///
/// Require for all a, b, c: `op(a, op(b, c)) == op(op(a, b), c)`
/// and `op(a, identity()) == op(identity(), a) == a`.
/// `op` need not be commutative; trees always fold left to right.
pub trait Monoid {
    /// Element type stored per leaf and per internal node.
    type Item: Clone;

    /// Identity element.
    fn identity() -> Self::Item;

    /// Associative combine.
    fn op(a: &Self::Item, b: &Self::Item) -> Self::Item;
}

/// Monoid that can fold `times` copies of one element in a single step.
pub trait RepeatMonoid: Monoid {
    /// `x op x op ... op x` with `times` copies, `times >= 1`.
    ///
    /// Sum multiplies, idempotent monoids (max, min) return `x`.
    fn repeat(x: &Self::Item, times: usize) -> Self::Item;
}

/// Monoid action used as a lazy range update.
///
/// Require for all f, g, a, b and every height d:
/// - `f.compose(g).apply(a, d) == f.apply(g.apply(a, d), d)`
/// - `f.apply(op(a, b), d + 1) == op(f.apply(a, d), f.apply(b, d))`
pub trait Action<M: Monoid>: Clone {
    /// The update that changes nothing.
    fn identity() -> Self;

    /// Whether this update is the identity (skips a push when true).
    fn is_identity(&self) -> bool;

    /// Apply to the aggregate of a node covering `2^height` leaves.
    fn apply(&self, value: &M::Item, height: u32) -> M::Item;

    /// `self` applied after `older`.
    fn compose(&self, older: &Self) -> Self;
}

/// Number of leaves under a node of the given height.
#[inline]
pub(crate) fn leaves_at(height: u32) -> usize {
    1usize << height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_at_height() {
        assert_eq!(leaves_at(0), 1);
        assert_eq!(leaves_at(1), 2);
        assert_eq!(leaves_at(10), 1024);
    }

    #[test]
    fn test_identity_laws_hold_for_builtin_monoids() {
        for x in [-7i64, 0, 3, 1_000_000] {
            assert_eq!(Sum::op(&x, &Sum::identity()), x);
            assert_eq!(Sum::op(&Sum::identity(), &x), x);
            assert_eq!(Max::op(&x, &Max::identity()), x);
            assert_eq!(Max::op(&Max::identity(), &x), x);
            assert_eq!(Min::op(&x, &Min::identity()), x);
            assert_eq!(Min::op(&Min::identity(), &x), x);
        }
    }
}
