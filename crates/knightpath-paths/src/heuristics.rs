//! Remaining-cost estimators for A*.
//!
//! Each heuristic declares whether it claims to be admissible. The engine
//! trusts that claim blindly; [`check_admissibility`](crate::check_admissibility)
//! is what measures it.

use std::fmt;

use knightpath_core::{Cost, Point};

use crate::distance::{chebyshev, knight_lower_bound, manhattan};
use crate::knight::KnightOracle;

/// An estimate of the remaining cost from a cell to the goal.
pub trait Heuristic {
    /// Short display name.
    fn name(&self) -> &str;

    /// Whether the estimate is claimed never to exceed the true remaining
    /// cost on any board whose cheapest cell costs `min_cost`.
    fn is_admissible(&self) -> bool;

    /// Estimated cost of reaching `goal` from `from`.
    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_admissible(&self) -> bool {
        (**self).is_admissible()
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        (**self).estimate(from, goal, min_cost)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_admissible(&self) -> bool {
        (**self).is_admissible()
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        (**self).estimate(from, goal, min_cost)
    }
}

/// Always 0: A* degrades to uniform-cost (Dijkstra) order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn name(&self) -> &str {
        "zero"
    }

    fn is_admissible(&self) -> bool {
        true
    }

    fn estimate(&self, _from: Point, _goal: Point, _min_cost: Cost) -> Cost {
        0.0
    }
}

/// Manhattan distance times `min_cost`.
///
/// Not admissible under knight moves: a single hop covers a Manhattan
/// distance of 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn name(&self) -> &str {
        "manhattan"
    }

    fn is_admissible(&self) -> bool {
        false
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        Cost::from(manhattan(from, goal)) * min_cost
    }
}

/// Chebyshev distance times `min_cost`.
///
/// Not admissible under knight moves: a single hop covers a Chebyshev
/// distance of 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl Heuristic for Chebyshev {
    fn name(&self) -> &str {
        "chebyshev"
    }

    fn is_admissible(&self) -> bool {
        false
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        Cost::from(chebyshev(from, goal)) * min_cost
    }
}

/// [`knight_lower_bound`] times `min_cost`. Admissible and closed-form.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnightBound;

impl Heuristic for KnightBound {
    fn name(&self) -> &str {
        "knight-bound"
    }

    fn is_admissible(&self) -> bool {
        true
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        Cost::from(knight_lower_bound(from, goal)) * min_cost
    }
}

/// Exact open-board knight hop count times `min_cost`.
///
/// Admissible: any path needs at least as many hops as on an empty board,
/// and every hop costs at least `min_cost`. Pairs the oracle cannot connect
/// estimate to infinity.
#[derive(Debug, Clone, Copy)]
pub struct KnightDistance<'a> {
    oracle: &'a KnightOracle,
}

impl<'a> KnightDistance<'a> {
    pub fn new(oracle: &'a KnightOracle) -> Self {
        Self { oracle }
    }
}

impl Heuristic for KnightDistance<'_> {
    fn name(&self) -> &str {
        "knight"
    }

    fn is_admissible(&self) -> bool {
        true
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        match self.oracle.distance(from, goal) {
            Some(hops) => Cost::from(hops) * min_cost,
            None => Cost::INFINITY,
        }
    }
}

/// Adapts a plain function or closure into a [`Heuristic`].
pub struct HeuristicFn<F> {
    name: String,
    admissible: bool,
    f: F,
}

impl<F: Fn(Point, Point, Cost) -> Cost> HeuristicFn<F> {
    pub fn new(name: impl Into<String>, admissible: bool, f: F) -> Self {
        Self {
            name: name.into(),
            admissible,
            f,
        }
    }
}

impl<F: Fn(Point, Point, Cost) -> Cost> Heuristic for HeuristicFn<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_admissible(&self) -> bool {
        self.admissible
    }

    fn estimate(&self, from: Point, goal: Point, min_cost: Cost) -> Cost {
        (self.f)(from, goal, min_cost)
    }
}

/// The built-in heuristics, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicKind {
    Zero,
    Manhattan,
    Chebyshev,
    KnightBound,
    Knight,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 5] = [
        HeuristicKind::Zero,
        HeuristicKind::Manhattan,
        HeuristicKind::Chebyshev,
        HeuristicKind::KnightBound,
        HeuristicKind::Knight,
    ];

    /// Instantiate the heuristic. Only [`HeuristicKind::Knight`] uses the
    /// oracle.
    pub fn build(self, oracle: &KnightOracle) -> Box<dyn Heuristic + '_> {
        match self {
            HeuristicKind::Zero => Box::new(Zero),
            HeuristicKind::Manhattan => Box::new(Manhattan),
            HeuristicKind::Chebyshev => Box::new(Chebyshev),
            HeuristicKind::KnightBound => Box::new(KnightBound),
            HeuristicKind::Knight => Box::new(KnightDistance::new(oracle)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Chebyshev => "chebyshev",
            HeuristicKind::KnightBound => "knight-bound",
            HeuristicKind::Knight => "knight",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
