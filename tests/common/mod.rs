#![allow(dead_code)]

use lazy_segtree::{LazySegmentTree, Monoid, NaiveArray, RepeatMonoid, Update, UpdateTree};
use proptest::prelude::*;

/// One scripted operation against both a tree and the reference.
#[derive(Debug, Clone)]
pub enum Op {
    Overwrite(usize, usize, i64),
    Accumulate(usize, usize, i64),
    Query(usize, usize),
}

/// Operations over `len` elements with constants in `[-100, 100]`.
pub fn ops(len: usize, max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    let range = (0..len, 0..len).prop_map(|(a, b)| (a.min(b), a.max(b)));
    let op = prop_oneof![
        (range.clone(), -100i64..=100).prop_map(|((l, r), x)| Op::Overwrite(l, r, x)),
        (range.clone(), -100i64..=100).prop_map(|((l, r), x)| Op::Accumulate(l, r, x)),
        range.prop_map(|(l, r)| Op::Query(l, r)),
    ];
    proptest::collection::vec(op, 0..max_ops)
}

/// Apply `op` to both; for queries return `(tree, reference)` answers.
pub fn step<M>(tree: &mut UpdateTree<M>, model: &mut NaiveArray<M>, op: &Op) -> Option<(i64, i64)>
where
    M: RepeatMonoid<Item = i64>,
{
    match *op {
        Op::Overwrite(l, r, x) => {
            tree.update(l, r, Update::Overwrite(x)).expect("valid range");
            model.apply_range(l, r, &Update::Overwrite(x)).expect("valid range");
            None
        }
        Op::Accumulate(l, r, x) => {
            tree.update(l, r, Update::Accumulate(x)).expect("valid range");
            model.apply_range(l, r, &Update::Accumulate(x)).expect("valid range");
            None
        }
        Op::Query(l, r) => Some((
            tree.query(l, r).expect("valid range"),
            model.fold(l, r).expect("valid range"),
        )),
    }
}

/// Every element read back through the tree.
pub fn snapshot<M, A>(tree: &mut LazySegmentTree<M, A>, len: usize) -> Vec<M::Item>
where
    M: Monoid,
    A: lazy_segtree::Action<M>,
{
    (0..len).map(|i| tree.get(i).expect("index in range")).collect()
}
