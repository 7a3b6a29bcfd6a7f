//! Random terrain generation for [`Board::randomize`](crate::Board::randomize).

use rand::{Rng, RngExt};

use crate::board::Terrain;
use crate::geom::Range;

/// Relative odds of each terrain class when drawing a random board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainWeights {
    pub road: u32,
    pub land: u32,
    pub mud: u32,
    pub barrier: u32,
}

impl Default for TerrainWeights {
    fn default() -> Self {
        Self {
            road: 25,
            land: 45,
            mud: 15,
            barrier: 15,
        }
    }
}

impl TerrainWeights {
    /// Sum of all weights; `u64` so four `u32::MAX` weights cannot overflow.
    fn total(&self) -> u64 {
        Terrain::ALL.iter().map(|&t| self.weight(t)).sum()
    }

    fn weight(&self, terrain: Terrain) -> u64 {
        u64::from(match terrain {
            Terrain::Road => self.road,
            Terrain::Land => self.land,
            Terrain::Mud => self.mud,
            Terrain::Barrier => self.barrier,
        })
    }
}

/// Draws terrain cell by cell from a [`TerrainWeights`] table.
pub struct TerrainGen<'a, R: Rng> {
    rng: &'a mut R,
    weights: &'a TerrainWeights,
}

impl<'a, R: Rng> TerrainGen<'a, R> {
    pub fn new(rng: &'a mut R, weights: &'a TerrainWeights) -> Self {
        Self { rng, weights }
    }

    /// Draw a single terrain class. All-zero weights yield [`Terrain::Land`].
    pub fn draw(&mut self) -> Terrain {
        let total = self.weights.total();
        if total == 0 {
            return Terrain::Land;
        }
        let mut roll = self.rng.random_range(0..total);
        for terrain in Terrain::ALL {
            let w = self.weights.weight(terrain);
            if roll < w {
                return terrain;
            }
            roll -= w;
        }
        Terrain::Land
    }

    /// Draw one terrain per cell of `bounds`, row-major.
    pub fn generate(&mut self, bounds: Range) -> Vec<Terrain> {
        (0..bounds.len()).map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generate_covers_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let weights = TerrainWeights::default();
        let cells = TerrainGen::new(&mut rng, &weights).generate(Range::with_size(8, 8));
        assert_eq!(cells.len(), 64);
    }

    #[test]
    fn single_class_weights() {
        let mut rng = StdRng::seed_from_u64(2);
        let only_mud = TerrainWeights {
            road: 0,
            land: 0,
            mud: 3,
            barrier: 0,
        };
        let cells = TerrainGen::new(&mut rng, &only_mud).generate(Range::with_size(5, 5));
        assert!(cells.iter().all(|&t| t == Terrain::Mud));
    }

    #[test]
    fn zero_weights_fall_back_to_land() {
        let mut rng = StdRng::seed_from_u64(3);
        let none = TerrainWeights {
            road: 0,
            land: 0,
            mud: 0,
            barrier: 0,
        };
        assert_eq!(TerrainGen::new(&mut rng, &none).draw(), Terrain::Land);
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(4);
        let huge = TerrainWeights {
            road: u32::MAX,
            land: u32::MAX,
            mud: u32::MAX,
            barrier: u32::MAX,
        };
        assert_eq!(huge.total(), 4 * u64::from(u32::MAX));
        let cells = TerrainGen::new(&mut rng, &huge).generate(Range::with_size(8, 8));
        assert_eq!(cells.len(), 64);
    }

    #[test]
    fn same_seed_same_board() {
        let weights = TerrainWeights::default();
        let a = TerrainGen::new(&mut StdRng::seed_from_u64(9), &weights).generate(Range::with_size(8, 8));
        let b = TerrainGen::new(&mut StdRng::seed_from_u64(9), &weights).generate(Range::with_size(8, 8));
        assert_eq!(a, b);
        assert!(Terrain::ALL.iter().any(|t| a.contains(t)));
    }
}
