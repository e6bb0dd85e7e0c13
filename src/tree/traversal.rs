//! Canonical segment traversal
//!
//! Walks an inclusive range of leaf nodes bottom-up and yields the
//! maximal subtrees that cover it without overlap, O(log n) of them.
//!
//! Order per level is fixed: left boundary first, then right boundary.
//! Non-commutative updates depend on it.

/// Which boundary of the range produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Segment came from the left boundary; folds after everything left of it.
    Left,

    /// Segment came from the right boundary; folds before everything right of it.
    Right,
}

/// One canonical segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Node index
    pub node: usize,

    /// Distance of the node from the leaf level
    pub height: u32,

    /// Boundary that emitted it
    pub side: Side,
}

/// Iterator over the canonical segments of `[left, right]` (node indices).
#[derive(Debug, Clone)]
pub struct CanonicalSegments {
    left: usize,
    right: usize,
    height: u32,
    next_side: Side,
}

impl CanonicalSegments {
    /// Segments covering leaf nodes `left..=right`.
    ///
    /// Both must be leaf node indices of the same tree.
    pub fn new(left: usize, right: usize) -> Self {
        Self {
            left,
            right,
            height: 0,
            next_side: Side::Left,
        }
    }
}

impl Iterator for CanonicalSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            if self.left > self.right {
                return None;
            }

            match self.next_side {
                Side::Left => {
                    self.next_side = Side::Right;
                    if self.left % 2 == 1 {
                        let node = self.left;
                        self.left += 1;
                        return Some(Segment {
                            node,
                            height: self.height,
                            side: Side::Left,
                        });
                    }
                }
                Side::Right => {
                    self.next_side = Side::Left;
                    let emitted = (self.right % 2 == 0).then(|| {
                        let node = self.right;
                        self.right -= 1;
                        Segment {
                            node,
                            height: self.height,
                            side: Side::Right,
                        }
                    });

                    self.left /= 2;
                    self.right /= 2;
                    self.height += 1;

                    if emitted.is_some() {
                        return emitted;
                    }
                }
            }
        }
    }
}
