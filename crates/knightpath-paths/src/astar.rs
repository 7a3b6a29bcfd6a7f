//! Step-wise A* over knight moves.
//!
//! [`AstarSearch`] is an explicit state machine: every call to
//! [`advance`](AstarSearch::advance) pops and expands exactly one frontier
//! node and hands back a [`Snapshot`], until the search terminates and a
//! [`SearchResult`] is returned instead. Nothing runs between calls, so a
//! caller can render, compare or simply drop a search at any point.

use std::collections::{BinaryHeap, HashMap, HashSet};

use knightpath_core::{Cost, Point};

use crate::heuristics::Heuristic;
use crate::neighbors::{Neighbors, is_knight_move};
use crate::node::{FrontierEntry, SearchNode};
use crate::traits::{Pather, WeightedPather};

/// Rejected search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("start {0} is out of bounds or a barrier")]
    InvalidStart(Point),
    #[error("goal {0} is out of bounds or a barrier")]
    InvalidGoal(Point),
}

/// Lifecycle of an [`AstarSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Constructed; nothing expanded yet.
    Ready,
    /// At least one expansion done, goal not yet reached.
    Running,
    /// Goal expanded or frontier exhausted.
    Terminated,
}

/// Frontier state right after one expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Positions with at least one live frontier entry.
    pub open: HashSet<Point>,
    /// Positions expanded so far, `current` included.
    pub closed: HashSet<Point>,
    /// Position expanded by this step.
    pub current: Point,
}

/// Terminal outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Start to goal inclusive, or `None` when the goal is unreachable.
    pub path: Option<Vec<Point>>,
    pub nodes_expanded: usize,
    /// Best g-cost found for every discovered position.
    pub g_costs: HashMap<Point, Cost>,
    /// Heuristic estimate at the start position.
    pub initial_heuristic: Cost,
}

impl SearchResult {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    /// Total cost of the returned path (g-cost of the goal).
    pub fn cost(&self) -> Option<Cost> {
        let goal = self.path.as_ref()?.last()?;
        self.g_costs.get(goal).copied()
    }

    /// Number of knight moves in the returned path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

/// Outcome of a single [`AstarSearch::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Progress(Snapshot),
    Finished(SearchResult),
}

/// An in-progress A* search from `start` to `goal`.
///
/// Each search owns its frontier, closed set and cost tables; several
/// searches over the same board can be advanced in any interleaving.
pub struct AstarSearch<'a, P: ?Sized, H: ?Sized> {
    board: &'a P,
    heuristic: &'a H,
    start: Point,
    goal: Point,
    min_cost: Cost,
    open: BinaryHeap<FrontierEntry>,
    closed: HashSet<Point>,
    g_costs: HashMap<Point, Cost>,
    parents: HashMap<Point, Point>,
    nbuf: Neighbors,
    seq: u64,
    nodes_expanded: usize,
    initial_heuristic: Cost,
    state: SearchState,
    result: Option<SearchResult>,
}

impl<'a, P, H> AstarSearch<'a, P, H>
where
    P: WeightedPather + ?Sized,
    H: Heuristic + ?Sized,
{
    /// Prepare a search. Fails if `start` or `goal` is not a valid cell.
    pub fn new(board: &'a P, start: Point, goal: Point, heuristic: &'a H) -> Result<Self, SearchError> {
        if !board.is_valid(start) {
            return Err(SearchError::InvalidStart(start));
        }
        if !board.is_valid(goal) {
            return Err(SearchError::InvalidGoal(goal));
        }
        let min_cost = board.min_cost();
        let initial_heuristic = heuristic.estimate(start, goal, min_cost);

        let mut search = Self {
            board,
            heuristic,
            start,
            goal,
            min_cost,
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            g_costs: HashMap::new(),
            parents: HashMap::new(),
            nbuf: Neighbors::new(),
            seq: 0,
            nodes_expanded: 0,
            initial_heuristic,
            state: SearchState::Ready,
            result: None,
        };
        search.g_costs.insert(start, 0.0);
        search.push(SearchNode::new(start, None, 0.0, initial_heuristic));
        Ok(search)
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    #[inline]
    pub fn initial_heuristic(&self) -> Cost {
        self.initial_heuristic
    }

    /// Positions expanded so far.
    #[inline]
    pub fn closed(&self) -> &HashSet<Point> {
        &self.closed
    }

    /// Best g-cost found so far per discovered position.
    #[inline]
    pub fn g_costs(&self) -> &HashMap<Point, Cost> {
        &self.g_costs
    }

    /// Positions that still have a live (non-closed) frontier entry.
    pub fn open_positions(&self) -> HashSet<Point> {
        self.open
            .iter()
            .map(|e| e.node.pos)
            .filter(|p| !self.closed.contains(p))
            .collect()
    }

    /// The terminal result, once the search has terminated.
    #[inline]
    pub fn result(&self) -> Option<&SearchResult> {
        self.result.as_ref()
    }

    /// Perform one pop-and-expand cycle.
    ///
    /// Returns [`Step::Progress`] after each expansion, including the one
    /// that reaches the goal. The call after that (or the call that finds
    /// the frontier empty) returns [`Step::Finished`]; further calls keep
    /// returning the same result.
    pub fn advance(&mut self) -> Step {
        if let Some(result) = &self.result {
            return Step::Finished(result.clone());
        }
        self.state = SearchState::Running;

        // Stale duplicates are dropped here rather than on update.
        let node = loop {
            match self.open.pop() {
                Some(e) if self.closed.contains(&e.node.pos) => continue,
                Some(e) => break e.node,
                None => return Step::Finished(self.finish(None)),
            }
        };

        let cp = node.pos;
        self.closed.insert(cp);
        if let Some(parent) = node.parent {
            self.parents.insert(cp, parent);
        }
        self.nodes_expanded += 1;
        log::trace!(
            "expand {cp} g={} h={} f={} (#{})",
            node.g,
            node.h,
            node.f,
            self.nodes_expanded
        );

        if cp == self.goal {
            let snapshot = self.snapshot(cp);
            let path = self.reconstruct(cp);
            self.finish(Some(path));
            return Step::Progress(snapshot);
        }

        let board = self.board;
        let mut nbuf = std::mem::take(&mut self.nbuf);
        for &np in nbuf.knight(cp, |n| board.is_valid(n)) {
            let tentative = node.g + board.cost(np);
            if self.g_costs.get(&np).is_some_and(|&g| tentative >= g) {
                continue;
            }
            self.g_costs.insert(np, tentative);
            let h = self.heuristic.estimate(np, self.goal, self.min_cost);
            self.push(SearchNode::new(np, Some(cp), tentative, h));
        }
        self.nbuf = nbuf;

        Step::Progress(self.snapshot(cp))
    }

    /// Drive the search to termination.
    pub fn run(mut self) -> SearchResult {
        loop {
            if let Step::Finished(result) = self.advance() {
                return result;
            }
        }
    }

    fn push(&mut self, node: SearchNode) {
        self.open.push(FrontierEntry { node, seq: self.seq });
        self.seq += 1;
    }

    fn snapshot(&self, current: Point) -> Snapshot {
        Snapshot {
            open: self.open_positions(),
            closed: self.closed.clone(),
            current,
        }
    }

    /// Walk parent links back from `to` to the start.
    fn reconstruct(&self, to: Point) -> Vec<Point> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(&parent) = self.parents.get(&cur) {
            path.push(parent);
            cur = parent;
        }
        path.reverse();
        path
    }

    fn finish(&mut self, path: Option<Vec<Point>>) -> SearchResult {
        self.state = SearchState::Terminated;
        match &path {
            Some(p) => log::debug!(
                "search {} -> {} reached goal: {} hops, cost {}, {} expanded",
                self.start,
                self.goal,
                p.len() - 1,
                self.g_costs.get(&self.goal).copied().unwrap_or(Cost::INFINITY),
                self.nodes_expanded
            ),
            None => log::debug!(
                "search {} -> {} exhausted frontier: {} expanded",
                self.start,
                self.goal,
                self.nodes_expanded
            ),
        }
        let result = SearchResult {
            path,
            nodes_expanded: self.nodes_expanded,
            g_costs: self.g_costs.clone(),
            initial_heuristic: self.initial_heuristic,
        };
        self.result = Some(result.clone());
        result
    }
}

/// Yields one [`Snapshot`] per expansion and stops at termination; the
/// outcome is then available from [`AstarSearch::result`].
impl<P, H> Iterator for AstarSearch<'_, P, H>
where
    P: WeightedPather + ?Sized,
    H: Heuristic + ?Sized,
{
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        match self.advance() {
            Step::Progress(snapshot) => Some(snapshot),
            Step::Finished(_) => None,
        }
    }
}

/// Convenience wrapper: build a search and run it to completion.
pub fn astar<P, H>(board: &P, start: Point, goal: Point, heuristic: &H) -> Result<SearchResult, SearchError>
where
    P: WeightedPather + ?Sized,
    H: Heuristic + ?Sized,
{
    Ok(AstarSearch::new(board, start, goal, heuristic)?.run())
}

/// Whether `path` is non-empty, every cell is valid and consecutive cells
/// are one knight move apart.
pub fn is_knight_path<P: Pather + ?Sized>(board: &P, path: &[Point]) -> bool {
    !path.is_empty()
        && path.iter().all(|&p| board.is_valid(p))
        && path.windows(2).all(|w| is_knight_move(w[0], w[1]))
}
