//! Board selection shared by every command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use knightpath_core::{Board, Point, TerrainCosts, TerrainWeights};
use rand::Rng;

#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Load the board from an ASCII map (`=` road, `.` land, `~` mud, `#` barrier)
    #[arg(long, value_name = "FILE", conflicts_with = "random")]
    pub map: Option<PathBuf>,

    /// Start from a randomly generated 8×8 board
    #[arg(long)]
    pub random: bool,

    /// Seed for board generation and pair sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cost of entering a road cell
    #[arg(long, default_value_t = 0.5)]
    pub road_cost: f64,

    /// Cost of entering a land cell
    #[arg(long, default_value_t = 1.0)]
    pub land_cost: f64,

    /// Cost of entering a mud cell
    #[arg(long, default_value_t = 5.0)]
    pub mud_cost: f64,
}

impl BoardArgs {
    pub fn costs(&self) -> TerrainCosts {
        TerrainCosts {
            road: self.road_cost,
            land: self.land_cost,
            mud: self.mud_cost,
        }
    }

    /// Build the board. A random board keeps every cell in `keep` passable.
    pub fn load<R: Rng>(&self, rng: &mut R, keep: &[Point]) -> Result<Board> {
        let costs = self.costs();
        let board = match &self.map {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading map {}", path.display()))?;
                Board::from_ascii(&text, costs).with_context(|| format!("parsing map {}", path.display()))?
            }
            None => {
                let mut board = Board::default();
                if costs != TerrainCosts::default() {
                    board = Board::from_ascii(&board.to_ascii(), costs).context("applying terrain costs")?;
                }
                if self.random {
                    board.randomize(rng, &TerrainWeights::default(), keep);
                }
                board
            }
        };
        tracing::debug!("board {}:\n{board}", board.bounds());
        Ok(board)
    }
}
