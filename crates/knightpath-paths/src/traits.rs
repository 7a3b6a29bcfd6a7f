use knightpath_core::{Board, Cost, Point};

/// Minimal board interface for the search engine: which cells may be
/// entered.
pub trait Pather {
    /// Whether `p` is in bounds and not a barrier.
    fn is_valid(&self, p: Point) -> bool;
}

/// Pather with per-cell entry costs.
pub trait WeightedPather: Pather {
    /// Cost of entering `p`. Only called for points where
    /// [`is_valid`](Pather::is_valid) holds; must be finite and > 0 there.
    fn cost(&self, p: Point) -> Cost;

    /// A positive lower bound on [`cost`](WeightedPather::cost) over every
    /// valid cell. Heuristics scale hop counts by this.
    fn min_cost(&self) -> Cost;
}

impl Pather for Board {
    #[inline]
    fn is_valid(&self, p: Point) -> bool {
        Board::is_valid(self, p)
    }
}

impl WeightedPather for Board {
    #[inline]
    fn cost(&self, p: Point) -> Cost {
        self.get_cost(p).unwrap_or(Cost::INFINITY)
    }

    #[inline]
    fn min_cost(&self) -> Cost {
        Board::min_cost(self)
    }
}
