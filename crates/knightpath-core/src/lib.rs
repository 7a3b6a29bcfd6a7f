//! **knightpath-core** — board types for knight-move pathfinding.
//!
//! This crate provides the geometry primitives and the terrain [`Board`]
//! that the search engine in `knightpath-paths` reads from, plus a simple
//! terrain randomizer.

pub mod board;
pub mod geom;
pub mod mapgen;

pub use board::{BOARD_SIZE, Board, BoardError, Cost, Terrain, TerrainCosts};
pub use geom::{ParsePointError, Point, Range};
pub use mapgen::{TerrainGen, TerrainWeights};
