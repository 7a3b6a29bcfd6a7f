//! The search board: a rectangle of terrain cells with entry costs.
//!
//! A [`Board`] answers the two questions the search engine asks of it:
//! [`is_valid`](Board::is_valid) and [`get_cost`](Board::get_cost). Boards
//! can be built empty, parsed from ASCII art, or regenerated in place with
//! [`randomize`](Board::randomize).

use std::fmt;

use rand::Rng;

use crate::geom::{Point, Range};
use crate::mapgen::{TerrainGen, TerrainWeights};

/// Traversal cost of entering a cell. Barriers cost `f64::INFINITY`.
pub type Cost = f64;

/// Default board side length.
pub const BOARD_SIZE: i32 = 8;

/// Terrain class of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Road,
    #[default]
    Land,
    Mud,
    /// Impassable; entry cost is infinite.
    Barrier,
}

impl Terrain {
    /// All terrain classes, cheapest first.
    pub const ALL: [Terrain; 4] = [Terrain::Road, Terrain::Land, Terrain::Mud, Terrain::Barrier];

    /// Map character used by [`Board::from_ascii`] and [`Board::to_ascii`].
    pub const fn glyph(self) -> char {
        match self {
            Terrain::Road => '=',
            Terrain::Land => '.',
            Terrain::Mud => '~',
            Terrain::Barrier => '#',
        }
    }

    /// Inverse of [`glyph`](Terrain::glyph).
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '=' => Some(Terrain::Road),
            '.' => Some(Terrain::Land),
            '~' => Some(Terrain::Mud),
            '#' => Some(Terrain::Barrier),
            _ => None,
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Road => "road",
            Terrain::Land => "land",
            Terrain::Mud => "mud",
            Terrain::Barrier => "barrier",
        };
        f.write_str(name)
    }
}

/// Entry cost for each passable terrain class.
///
/// Every cost must be finite and strictly positive; this keeps
/// [`Board::min_cost`] a valid per-move lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCosts {
    pub road: Cost,
    pub land: Cost,
    pub mud: Cost,
}

impl Default for TerrainCosts {
    fn default() -> Self {
        Self {
            road: 0.5,
            land: 1.0,
            mud: 5.0,
        }
    }
}

impl TerrainCosts {
    /// Cost of entering a cell of the given terrain.
    #[inline]
    pub fn of(&self, terrain: Terrain) -> Cost {
        match terrain {
            Terrain::Road => self.road,
            Terrain::Land => self.land,
            Terrain::Mud => self.mud,
            Terrain::Barrier => Cost::INFINITY,
        }
    }

    /// Smallest finite cost over all terrain classes.
    #[inline]
    pub fn min(&self) -> Cost {
        self.road.min(self.land).min(self.mud)
    }

    /// Reject non-finite or non-positive costs.
    pub fn validate(&self) -> Result<(), BoardError> {
        for terrain in [Terrain::Road, Terrain::Land, Terrain::Mud] {
            let cost = self.of(terrain);
            if !cost.is_finite() || cost <= 0.0 {
                return Err(BoardError::InvalidCost { terrain, cost });
            }
        }
        Ok(())
    }
}

/// Errors raised while building or querying a [`Board`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    #[error("position {pos} is outside the board {bounds}")]
    OutOfBounds { pos: Point, bounds: Range },
    #[error("{terrain} cost must be finite and positive, got {cost}")]
    InvalidCost { terrain: Terrain, cost: Cost },
    #[error("board map has inconsistent row widths:\n{0}")]
    InconsistentSize(String),
    #[error("board map contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidRune { ch: char, pos: Point },
    #[error("board map is empty")]
    Empty,
    #[error("board {bounds} needs {expected} cells, got {found}")]
    CellCount { bounds: Range, expected: usize, found: usize },
}

/// The default 8×8 map: a road ring around a mud-and-barrier core.
const DEFAULT_MAP: &str = "\
........
.======.
.=.~~.=.
.=.##.=.
.=.##.=.
.=.~~.=.
.======.
........";

/// A finite grid of terrain cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoardRepr"))]
pub struct Board {
    bounds: Range,
    cells: Vec<Terrain>,
    costs: TerrainCosts,
}

/// Unchecked wire form of a [`Board`]; deserialized boards go through
/// [`Board::try_from`] so costs and cell count are validated.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BoardRepr {
    bounds: Range,
    cells: Vec<Terrain>,
    costs: TerrainCosts,
}

#[cfg(feature = "serde")]
impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, BoardError> {
        repr.costs.validate()?;
        if repr.bounds.is_empty() {
            return Err(BoardError::Empty);
        }
        if repr.cells.len() != repr.bounds.len() {
            return Err(BoardError::CellCount {
                bounds: repr.bounds,
                expected: repr.bounds.len(),
                found: repr.cells.len(),
            });
        }
        Ok(Self {
            bounds: repr.bounds,
            cells: repr.cells,
            costs: repr.costs,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        let cells = DEFAULT_MAP
            .lines()
            .flat_map(str::chars)
            .map(|ch| Terrain::from_glyph(ch).unwrap_or_default())
            .collect();
        Self {
            bounds: Range::with_size(BOARD_SIZE, BOARD_SIZE),
            cells,
            costs: TerrainCosts::default(),
        }
    }
}

impl Board {
    /// Create a `width`×`height` board covered in [`Terrain::Land`].
    pub fn new(width: i32, height: i32, costs: TerrainCosts) -> Result<Self, BoardError> {
        costs.validate()?;
        let bounds = Range::with_size(width, height);
        if bounds.is_empty() {
            return Err(BoardError::Empty);
        }
        Ok(Self {
            bounds,
            cells: vec![Terrain::Land; bounds.len()],
            costs,
        })
    }

    /// Parse a board from ASCII art.
    ///
    /// Each non-blank line is one row; `=` road, `.` land, `~` mud and
    /// `#` barrier. Surrounding whitespace on each line is ignored. All rows
    /// must have the same width.
    pub fn from_ascii(s: &str, costs: TerrainCosts) -> Result<Self, BoardError> {
        costs.validate()?;
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(BoardError::Empty);
        };
        let width = first.chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(BoardError::InconsistentSize(rows.join("\n")));
            }
            for (x, ch) in row.chars().enumerate() {
                let terrain = Terrain::from_glyph(ch).ok_or(BoardError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(terrain);
            }
        }
        Ok(Self {
            bounds: Range::with_size(width as i32, rows.len() as i32),
            cells,
            costs,
        })
    }

    /// Render the board back to the format accepted by
    /// [`from_ascii`](Board::from_ascii).
    pub fn to_ascii(&self) -> String {
        self.render(|_, terrain| terrain.glyph())
    }

    /// Render one character per cell, rows separated by `'\n'`.
    pub fn render(&self, mut glyph: impl FnMut(Point, Terrain) -> char) -> String {
        let w = self.bounds.width() as usize;
        let mut out = String::with_capacity(self.cells.len() + self.bounds.height() as usize);
        for (i, (p, terrain)) in self.cells().enumerate() {
            if i > 0 && i % w == 0 {
                out.push('\n');
            }
            out.push(glyph(p, terrain));
        }
        out
    }

    /// The rectangle covered by the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The cost table in use.
    #[inline]
    pub fn costs(&self) -> &TerrainCosts {
        &self.costs
    }

    /// True iff `p` is in bounds and not a barrier.
    #[inline]
    pub fn is_valid(&self, p: Point) -> bool {
        self.terrain(p).is_some_and(|t| t != Terrain::Barrier)
    }

    /// Cost of entering `p`. Barrier cells report `f64::INFINITY`.
    pub fn get_cost(&self, p: Point) -> Result<Cost, BoardError> {
        self.terrain(p)
            .map(|t| self.costs.of(t))
            .ok_or(BoardError::OutOfBounds {
                pos: p,
                bounds: self.bounds,
            })
    }

    /// Smallest finite cost over all terrain classes; always `> 0`.
    #[inline]
    pub fn min_cost(&self) -> Cost {
        self.costs.min()
    }

    /// Terrain at `p`, or `None` if out of bounds.
    #[inline]
    pub fn terrain(&self, p: Point) -> Option<Terrain> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the terrain at `p`.
    pub fn set(&mut self, p: Point, terrain: Terrain) -> Result<(), BoardError> {
        let i = self.bounds.index(p).ok_or(BoardError::OutOfBounds {
            pos: p,
            bounds: self.bounds,
        })?;
        self.cells[i] = terrain;
        Ok(())
    }

    /// Row-major iterator over `(Point, Terrain)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// All valid (in-bounds, non-barrier) positions, row-major.
    pub fn valid_positions(&self) -> Vec<Point> {
        self.cells()
            .filter(|&(_, t)| t != Terrain::Barrier)
            .map(|(p, _)| p)
            .collect()
    }

    /// Replace every cell with freshly drawn terrain.
    ///
    /// Cells listed in `keep` (when in bounds) are forced to
    /// [`Terrain::Land`] so that a chosen start and goal stay valid. The new
    /// grid is generated in full before it replaces the old one.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, weights: &TerrainWeights, keep: &[Point]) {
        let mut cells = TerrainGen::new(rng, weights).generate(self.bounds);
        for &p in keep {
            if let Some(i) = self.bounds.index(p) {
                cells[i] = Terrain::Land;
            }
        }
        self.cells = cells;
        log::debug!("randomized {} board", self.bounds);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_board_layout() {
        let b = Board::default();
        assert_eq!(b.bounds(), Range::with_size(8, 8));
        for p in [Point::new(3, 3), Point::new(4, 3), Point::new(3, 4), Point::new(4, 4)] {
            assert_eq!(b.terrain(p), Some(Terrain::Barrier));
            assert!(!b.is_valid(p));
        }
        assert_eq!(b.terrain(Point::new(1, 1)), Some(Terrain::Road));
        assert_eq!(b.terrain(Point::new(3, 2)), Some(Terrain::Mud));
        assert_eq!(b.terrain(Point::new(0, 0)), Some(Terrain::Land));
        assert_eq!(b.valid_positions().len(), 60);
    }

    #[test]
    fn costs_and_validity() {
        let b = Board::default();
        assert_eq!(b.get_cost(Point::new(1, 1)), Ok(0.5));
        assert_eq!(b.get_cost(Point::new(0, 0)), Ok(1.0));
        assert_eq!(b.get_cost(Point::new(3, 2)), Ok(5.0));
        assert_eq!(b.get_cost(Point::new(3, 3)), Ok(f64::INFINITY));
        assert!(b.is_valid(Point::new(7, 7)));
        assert!(!b.is_valid(Point::new(8, 0)));
        assert!(!b.is_valid(Point::new(0, -1)));
    }

    #[test]
    fn out_of_bounds_cost_is_an_error() {
        let b = Board::default();
        let err = b.get_cost(Point::new(8, 8)).unwrap_err();
        assert_eq!(
            err,
            BoardError::OutOfBounds {
                pos: Point::new(8, 8),
                bounds: Range::with_size(8, 8),
            }
        );
    }

    #[test]
    fn min_cost_spans_all_classes() {
        // No road on this board, yet min_cost still reflects the road class.
        let b = Board::new(4, 4, TerrainCosts::default()).unwrap();
        assert_eq!(b.min_cost(), 0.5);
        let custom = TerrainCosts {
            road: 2.0,
            land: 3.0,
            mud: 1.5,
        };
        assert_eq!(Board::new(2, 2, custom).unwrap().min_cost(), 1.5);
    }

    #[test]
    fn invalid_costs_are_rejected() {
        let zero = TerrainCosts {
            road: 0.0,
            ..TerrainCosts::default()
        };
        assert!(matches!(
            Board::new(8, 8, zero),
            Err(BoardError::InvalidCost {
                terrain: Terrain::Road,
                ..
            })
        ));
        let inf = TerrainCosts {
            mud: f64::INFINITY,
            ..TerrainCosts::default()
        };
        assert!(Board::new(8, 8, inf).is_err());
        let nan = TerrainCosts {
            land: f64::NAN,
            ..TerrainCosts::default()
        };
        assert!(Board::new(8, 8, nan).is_err());
    }

    #[test]
    fn ascii_round_trip() {
        let b = Board::default();
        let text = b.to_ascii();
        assert_eq!(text, DEFAULT_MAP);
        assert_eq!(Board::from_ascii(&text, TerrainCosts::default()).unwrap(), b);
    }

    #[test]
    fn ascii_ignores_indentation_and_blank_lines() {
        let b = Board::from_ascii("\n   =.~\n\n   #..\n", TerrainCosts::default()).unwrap();
        assert_eq!(b.bounds(), Range::with_size(3, 2));
        assert_eq!(b.terrain(Point::new(2, 0)), Some(Terrain::Mud));
        assert_eq!(b.terrain(Point::new(0, 1)), Some(Terrain::Barrier));
    }

    #[test]
    fn ascii_errors() {
        let costs = TerrainCosts::default();
        assert_eq!(Board::from_ascii("  \n ", costs), Err(BoardError::Empty));
        assert!(matches!(
            Board::from_ascii("...\n..", costs),
            Err(BoardError::InconsistentSize(_))
        ));
        assert_eq!(
            Board::from_ascii("...\n.x.", costs),
            Err(BoardError::InvalidRune {
                ch: 'x',
                pos: Point::new(1, 1),
            })
        );
    }

    #[test]
    fn set_terrain() {
        let mut b = Board::new(3, 3, TerrainCosts::default()).unwrap();
        b.set(Point::new(1, 1), Terrain::Barrier).unwrap();
        assert!(!b.is_valid(Point::new(1, 1)));
        assert!(b.set(Point::new(3, 0), Terrain::Mud).is_err());
    }

    #[test]
    fn randomize_keeps_protected_cells_valid() {
        let mut b = Board::default();
        let mut rng = StdRng::seed_from_u64(7);
        let all_barrier = TerrainWeights {
            road: 0,
            land: 0,
            mud: 0,
            barrier: 1,
        };
        let keep = [Point::new(1, 1), Point::new(6, 6), Point::new(42, 0)];
        b.randomize(&mut rng, &all_barrier, &keep);
        assert_eq!(b.valid_positions(), vec![Point::new(1, 1), Point::new(6, 6)]);
        assert_eq!(b.bounds(), Range::with_size(8, 8));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn board_json_round_trip() {
        let b = Board::default();
        let json = serde_json::to_string(&b).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    fn json_with(cells: usize, costs: &str) -> String {
        let cells = vec!["\"Land\""; cells].join(",");
        format!(
            r#"{{"bounds":{{"min":{{"x":0,"y":0}},"max":{{"x":8,"y":8}}}},"cells":[{cells}],"costs":{costs}}}"#
        )
    }

    #[test]
    fn deserialize_rejects_bad_costs() {
        let json = json_with(64, r#"{"road":-1.0,"land":0.0,"mud":5.0}"#);
        let err = serde_json::from_str::<Board>(&json).unwrap_err();
        assert!(err.to_string().contains("road cost must be finite and positive"), "{err}");
    }

    #[test]
    fn deserialize_rejects_short_cell_list() {
        let json = json_with(1, r#"{"road":0.5,"land":1.0,"mud":5.0}"#);
        let err = serde_json::from_str::<Board>(&json).unwrap_err();
        assert!(err.to_string().contains("needs 64 cells, got 1"), "{err}");

        let ok: Board = serde_json::from_str(&json_with(64, r#"{"road":0.5,"land":1.0,"mud":5.0}"#)).unwrap();
        assert!(ok.is_valid(Point::new(7, 7)));
        assert_eq!(ok.min_cost(), 0.5);
    }
}
