//! Built-in monoids over `i64`
//!
//! Marker types only: the monoid lives in the type, never in a value.

use super::{Monoid, RepeatMonoid};

/// Addition modulo 2^64, identity 0.
///
/// Wrapping keeps the monoid lawful for any inputs, so large constants
/// never panic and every tree agrees with a direct fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sum {}

impl Monoid for Sum {
    type Item = i64;

    fn identity() -> i64 {
        0
    }

    fn op(a: &i64, b: &i64) -> i64 {
        a.wrapping_add(*b)
    }
}

impl RepeatMonoid for Sum {
    fn repeat(x: &i64, times: usize) -> i64 {
        x.wrapping_mul(times as i64)
    }
}

/// Maximum, identity `i64::MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Max {}

impl Monoid for Max {
    type Item = i64;

    fn identity() -> i64 {
        i64::MIN
    }

    fn op(a: &i64, b: &i64) -> i64 {
        (*a).max(*b)
    }
}

impl RepeatMonoid for Max {
    fn repeat(x: &i64, _times: usize) -> i64 {
        *x
    }
}

/// Minimum, identity `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Min {}

impl Monoid for Min {
    type Item = i64;

    fn identity() -> i64 {
        i64::MAX
    }

    fn op(a: &i64, b: &i64) -> i64 {
        (*a).min(*b)
    }
}

impl RepeatMonoid for Min {
    fn repeat(x: &i64, _times: usize) -> i64 {
        *x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_repeat_multiplies() {
        assert_eq!(Sum::repeat(&3, 4), 12);
        assert_eq!(Sum::repeat(&-2, 8), -16);
    }

    #[test]
    fn test_sum_wraps_instead_of_overflowing() {
        assert_eq!(Sum::op(&i64::MAX, &1), i64::MIN);
        assert_eq!(Sum::repeat(&(i64::MAX / 2), 4), (i64::MAX / 2).wrapping_mul(4));

        let x = i64::MAX / 3;
        let folded = (0..8).fold(Sum::identity(), |acc, _| Sum::op(&acc, &x));
        assert_eq!(Sum::repeat(&x, 8), folded);
    }

    #[test]
    fn test_repeat_matches_folding_copies() {
        for times in 1..=16usize {
            let x = 5i64;
            let folded_sum = (0..times).fold(Sum::identity(), |acc, _| Sum::op(&acc, &x));
            let folded_max = (0..times).fold(Max::identity(), |acc, _| Max::op(&acc, &x));
            let folded_min = (0..times).fold(Min::identity(), |acc, _| Min::op(&acc, &x));
            assert_eq!(Sum::repeat(&x, times), folded_sum);
            assert_eq!(Max::repeat(&x, times), folded_max);
            assert_eq!(Min::repeat(&x, times), folded_min);
        }
    }
}
