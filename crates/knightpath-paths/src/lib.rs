//! Knight-move pathfinding: a step-wise A* engine and the tools to judge
//! its heuristics.
//!
//! - **A\*** with lazy frontier deletion, one expansion per
//!   [`AstarSearch::advance`] call
//! - **Heuristics** with declared admissibility ([`Heuristic`])
//! - **Knight-distance oracle**: memoised open-board BFS ([`KnightOracle`])
//! - **Side-by-side** lockstep comparison of two heuristics ([`SideBySide`])
//! - **Admissibility harness** against zero-heuristic ground truth
//!   ([`check_admissibility`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | path validation |
//! | [`WeightedPather`] : [`Pather`] | A* |

mod admissibility;
mod astar;
mod compare;
mod distance;
mod heuristics;
mod knight;
mod neighbors;
mod node;
mod traits;

pub use admissibility::{
    AdmissibilityConfig, AdmissibilityReport, Estimate, HarnessError, HeuristicTally, PairOutcome,
    check_admissibility,
};
pub use astar::{AstarSearch, SearchError, SearchResult, SearchState, Snapshot, Step, astar, is_knight_path};
pub use compare::{Round, SideBySide};
pub use distance::{chebyshev, knight_lower_bound, manhattan};
pub use heuristics::{
    Chebyshev, Heuristic, HeuristicFn, HeuristicKind, KnightBound, KnightDistance, Manhattan, Zero,
};
pub use knight::KnightOracle;
pub use neighbors::{KNIGHT_OFFSETS, Neighbors, is_knight_move};
pub use node::SearchNode;
pub use traits::{Pather, WeightedPather};
