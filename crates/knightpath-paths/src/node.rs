use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use knightpath_core::{Cost, Point};

/// A cell discovered during search, with the costs it was pushed under.
///
/// Equality and hashing look at `pos` only: two nodes for the same cell are
/// the same node whatever their costs, which is what frontier and
/// closed-set membership rely on.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    /// Cell this node was reached from; `None` for the start.
    pub parent: Option<Point>,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
}

impl SearchNode {
    pub fn new(pos: Point, parent: Option<Point>, g: Cost, h: Cost) -> Self {
        Self {
            pos,
            parent,
            g,
            h,
            f: g + h,
        }
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Heap entry wrapping a [`SearchNode`], ordered by `f` then insertion
/// sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) node: SearchNode,
    pub(crate) seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops smallest f, then oldest.
        other
            .node
            .f
            .total_cmp(&self.node.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}
