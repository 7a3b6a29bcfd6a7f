use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use knightpath_core::{BOARD_SIZE, Point, Range};

use crate::neighbors::Neighbors;

/// Sentinel in the BFS scratch map for cells not yet reached.
const UNSEEN: u32 = u32::MAX;

/// Shortest knight hop counts on an unobstructed board, memoised.
///
/// Distances ignore terrain entirely, so an oracle stays valid across
/// [`Board::randomize`](knightpath_core::Board::randomize) and can be shared
/// by every search on boards of the same dimensions. Lookups take `&self`;
/// the cache sits behind a `RefCell`, which keeps the oracle `!Sync`.
#[derive(Debug)]
pub struct KnightOracle {
    bounds: Range,
    cache: RefCell<HashMap<(Point, Point), Option<u32>>>,
}

impl Default for KnightOracle {
    /// Oracle for the standard 8×8 board.
    fn default() -> Self {
        Self::new(Range::with_size(BOARD_SIZE, BOARD_SIZE))
    }
}

impl KnightOracle {
    /// Create an oracle for an open board covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// The open board the oracle measures on.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Minimum number of knight moves from `from` to `to`.
    ///
    /// Returns `None` when either point lies off the oracle's board or `to`
    /// cannot be reached (only possible on very small boards).
    pub fn distance(&self, from: Point, to: Point) -> Option<u32> {
        if let Some(&d) = self.cache.borrow().get(&(from, to)) {
            return d;
        }
        let d = self.bfs(from, to);
        log::debug!("knight distance {from} -> {to}: {d:?}");
        self.cache.borrow_mut().insert((from, to), d);
        d
    }

    /// Number of (from, to) pairs memoised so far.
    pub fn cached_pairs(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Breadth-first search from `from`, stopping as soon as `to` is
    /// dequeued.
    fn bfs(&self, from: Point, to: Point) -> Option<u32> {
        let (Some(si), Some(_)) = (self.bounds.index(from), self.bounds.index(to)) else {
            return None;
        };

        let mut dist = vec![UNSEEN; self.bounds.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut nb = Neighbors::new();
        dist[si] = 0;
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            let cp = self.bounds.point(ci);
            if cp == to {
                return Some(dist[ci]);
            }
            let nd = dist[ci] + 1;
            for &np in nb.knight(cp, |n| self.bounds.contains(n)) {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                if dist[ni] != UNSEEN {
                    continue;
                }
                dist[ni] = nd;
                queue.push_back(ni);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::knight_lower_bound;

    #[test]
    fn corner_to_corner() {
        let oracle = KnightOracle::default();
        let d = oracle.distance(Point::new(0, 0), Point::new(7, 7));
        assert_eq!(d, Some(6));
        assert_eq!(oracle.distance(Point::new(7, 7), Point::new(0, 0)), d);
    }

    #[test]
    fn trivial_distances() {
        let oracle = KnightOracle::default();
        let p = Point::new(3, 4);
        assert_eq!(oracle.distance(p, p), Some(0));
        assert_eq!(oracle.distance(p, Point::new(5, 5)), Some(1));
        // Adjacent diagonal cells need two hops on an open board.
        assert_eq!(oracle.distance(p, Point::new(4, 5)), Some(2));
        // Corner to its diagonal neighbour is the classic 4-hop case.
        assert_eq!(oracle.distance(Point::new(0, 0), Point::new(1, 1)), Some(4));
    }

    #[test]
    fn symmetric_and_bounded_below() {
        let oracle = KnightOracle::default();
        let bounds = oracle.bounds();
        for a in bounds.iter() {
            for b in bounds.iter() {
                let d = oracle.distance(a, b).unwrap();
                assert_eq!(oracle.distance(b, a), Some(d));
                assert!(knight_lower_bound(a, b) as u32 <= d, "{a} -> {b}");
            }
        }
        assert_eq!(oracle.cached_pairs(), 64 * 64);
    }

    #[test]
    fn off_board_is_unreachable() {
        let oracle = KnightOracle::default();
        assert_eq!(oracle.distance(Point::new(-1, 0), Point::new(2, 2)), None);
        assert_eq!(oracle.distance(Point::new(2, 2), Point::new(8, 8)), None);
    }

    #[test]
    fn tiny_board_has_unreachable_cells() {
        // On a 3×3 board the centre square has no knight moves.
        let oracle = KnightOracle::new(Range::with_size(3, 3));
        assert_eq!(oracle.distance(Point::new(0, 0), Point::new(1, 1)), None);
        assert_eq!(oracle.distance(Point::new(0, 0), Point::new(2, 1)), Some(1));
    }

    #[test]
    fn results_are_memoised() {
        let oracle = KnightOracle::default();
        assert_eq!(oracle.cached_pairs(), 0);
        oracle.distance(Point::new(1, 1), Point::new(6, 6));
        oracle.distance(Point::new(1, 1), Point::new(6, 6));
        assert_eq!(oracle.cached_pairs(), 1);
        // Ordered pairs: the reverse direction is its own entry.
        oracle.distance(Point::new(6, 6), Point::new(1, 1));
        assert_eq!(oracle.cached_pairs(), 2);
    }
}
