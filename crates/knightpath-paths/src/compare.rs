//! Two searches over the same board, advanced in lockstep.

use knightpath_core::Point;

use crate::astar::{AstarSearch, SearchError, SearchResult, Snapshot, Step};
use crate::heuristics::Heuristic;
use crate::traits::WeightedPather;

/// One lockstep round: what each side did this round. A side that has
/// already terminated reports `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub left: Option<Snapshot>,
    pub right: Option<Snapshot>,
}

/// Races two heuristics on the same start and goal, one expansion each per
/// round, so their frontiers can be observed side by side.
pub struct SideBySide<'a, P: ?Sized, L: ?Sized, R: ?Sized> {
    left: AstarSearch<'a, P, L>,
    right: AstarSearch<'a, P, R>,
    rounds: usize,
}

impl<'a, P, L, R> SideBySide<'a, P, L, R>
where
    P: WeightedPather + ?Sized,
    L: Heuristic + ?Sized,
    R: Heuristic + ?Sized,
{
    pub fn new(board: &'a P, start: Point, goal: Point, left: &'a L, right: &'a R) -> Result<Self, SearchError> {
        Ok(Self {
            left: AstarSearch::new(board, start, goal, left)?,
            right: AstarSearch::new(board, start, goal, right)?,
            rounds: 0,
        })
    }

    pub fn left(&self) -> &AstarSearch<'a, P, L> {
        &self.left
    }

    pub fn right(&self) -> &AstarSearch<'a, P, R> {
        &self.right
    }

    /// Rounds played so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Advance each unfinished side by one step. Returns `None` once both
    /// sides have terminated.
    pub fn advance(&mut self) -> Option<Round> {
        let left = progress(self.left.advance());
        let right = progress(self.right.advance());
        if left.is_none() && right.is_none() {
            return None;
        }
        self.rounds += 1;
        Some(Round { left, right })
    }

    /// Play rounds until both sides terminate; returns both results.
    pub fn run(mut self) -> (SearchResult, SearchResult) {
        while self.advance().is_some() {}
        let left = self.left.run();
        let right = self.right.run();
        log::info!(
            "side by side: left expanded {}, right expanded {}",
            left.nodes_expanded,
            right.nodes_expanded
        );
        (left, right)
    }
}

fn progress(step: Step) -> Option<Snapshot> {
    match step {
        Step::Progress(s) => Some(s),
        Step::Finished(_) => None,
    }
}
