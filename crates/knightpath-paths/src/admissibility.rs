//! Empirical admissibility check for heuristics.
//!
//! Ground truth comes from running the search with [`Zero`] (uniform-cost
//! order) between randomly sampled valid pairs. Each candidate heuristic is
//! then evaluated at the start cell and compared against the optimal cost.

use knightpath_core::{Board, Cost, Point};
use rand::{Rng, RngExt};

use crate::astar::{SearchError, astar};
use crate::heuristics::{Heuristic, Zero};

/// Harness parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdmissibilityConfig {
    /// Number of (start, goal) pairs to sample.
    pub samples: usize,
    /// Rounding slack: `h ≤ optimal + epsilon` counts as a pass.
    pub epsilon: Cost,
}

impl Default for AdmissibilityConfig {
    fn default() -> Self {
        Self {
            samples: 10,
            epsilon: 1e-9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HarnessError {
    #[error("board has {0} valid cells; at least 2 are needed to sample pairs")]
    NotEnoughValidCells(usize),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// One heuristic evaluated at the start of one sampled pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Estimate {
    pub heuristic: String,
    /// `None` when the estimate is unbounded (`+∞`).
    pub value: Option<Cost>,
    /// `None` when the pair is unreachable and the bound is vacuous.
    pub admissible: Option<bool>,
}

/// Ground truth and estimates for one sampled pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairOutcome {
    pub start: Point,
    pub goal: Point,
    /// Optimal cost, or `None` if the goal is unreachable.
    pub optimal_cost: Option<Cost>,
    /// Expansions the zero-heuristic search needed.
    pub nodes_expanded: usize,
    pub estimates: Vec<Estimate>,
}

/// Aggregate verdict for one heuristic over all reachable pairs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicTally {
    pub heuristic: String,
    /// What the heuristic claims about itself.
    pub declared_admissible: bool,
    pub passed: usize,
    pub checked: usize,
    /// Checked pairs where the estimate was unbounded; each is a failure.
    pub unbounded: usize,
    /// Largest finite `h - optimal` seen, or `None` if no finite estimate
    /// was checked. `<= 0` when every pair passed.
    pub worst_excess: Option<Cost>,
}

impl HeuristicTally {
    pub fn failed(&self) -> usize {
        self.checked - self.passed
    }

    /// Fraction of checked pairs that passed, or `None` if none were checked.
    pub fn pass_rate(&self) -> Option<f64> {
        (self.checked > 0).then(|| self.passed as f64 / self.checked as f64)
    }

    /// Passed every checked pair.
    pub fn all_passed(&self) -> bool {
        self.passed == self.checked
    }
}

/// Full harness output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdmissibilityReport {
    pub pairs: Vec<PairOutcome>,
    /// One entry per candidate, in the order given.
    pub tallies: Vec<HeuristicTally>,
    /// Sampled pairs with no path; excluded from the tallies.
    pub unreachable: usize,
}

/// Sample `config.samples` valid, distinct pairs and check every candidate
/// heuristic against the zero-heuristic optimum.
pub fn check_admissibility<R: Rng>(
    board: &Board,
    candidates: &[&dyn Heuristic],
    config: &AdmissibilityConfig,
    rng: &mut R,
) -> Result<AdmissibilityReport, HarnessError> {
    let valid = board.valid_positions();
    if valid.len() < 2 {
        return Err(HarnessError::NotEnoughValidCells(valid.len()));
    }
    let min_cost = board.min_cost();

    let mut tallies: Vec<HeuristicTally> = candidates
        .iter()
        .map(|h| HeuristicTally {
            heuristic: h.name().to_string(),
            declared_admissible: h.is_admissible(),
            passed: 0,
            checked: 0,
            unbounded: 0,
            worst_excess: None,
        })
        .collect();
    let mut pairs = Vec::with_capacity(config.samples);
    let mut unreachable = 0;

    for _ in 0..config.samples {
        let (start, goal) = sample_pair(&valid, rng);
        let truth = astar(board, start, goal, &Zero)?;
        let optimal_cost = truth.cost();
        if optimal_cost.is_none() {
            unreachable += 1;
            log::info!("{start} -> {goal} is unreachable; excluded from tallies");
        }

        let mut estimates = Vec::with_capacity(candidates.len());
        for (h, tally) in candidates.iter().zip(tallies.iter_mut()) {
            let value = h.estimate(start, goal, min_cost);
            let admissible = optimal_cost.map(|opt| {
                let ok = value <= opt + config.epsilon;
                tally.checked += 1;
                tally.passed += usize::from(ok);
                if value.is_finite() {
                    let excess = value - opt;
                    tally.worst_excess = Some(tally.worst_excess.map_or(excess, |w| w.max(excess)));
                } else {
                    tally.unbounded += 1;
                }
                if !ok {
                    log::warn!(
                        "{} overestimates {start} -> {goal}: h = {value}, optimal = {opt}",
                        h.name()
                    );
                }
                ok
            });
            estimates.push(Estimate {
                heuristic: h.name().to_string(),
                value: value.is_finite().then_some(value),
                admissible,
            });
        }

        pairs.push(PairOutcome {
            start,
            goal,
            optimal_cost,
            nodes_expanded: truth.nodes_expanded,
            estimates,
        });
    }

    for t in &tallies {
        log::info!("{}: admissible on {}/{} pairs", t.heuristic, t.passed, t.checked);
    }

    Ok(AdmissibilityReport {
        pairs,
        tallies,
        unreachable,
    })
}

/// Two distinct cells drawn uniformly from `valid` (which has ≥ 2 entries).
fn sample_pair<R: Rng>(valid: &[Point], rng: &mut R) -> (Point, Point) {
    let start = valid[rng.random_range(0..valid.len())];
    loop {
        let goal = valid[rng.random_range(0..valid.len())];
        if goal != start {
            return (start, goal);
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::heuristics::{HeuristicFn, Manhattan};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_json_round_trip_with_unbounded_estimates() {
        let board = Board::default();
        let infinite = HeuristicFn::new("infinite", true, |_, _, _| Cost::INFINITY);
        let mut rng = StdRng::seed_from_u64(2);
        let report =
            check_admissibility(&board, &[&infinite, &Manhattan], &AdmissibilityConfig::default(), &mut rng).unwrap();

        let json = serde_json::to_string(&report).unwrap();
        let back: AdmissibilityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert_eq!(back.tallies[0].worst_excess, None);
    }
}
