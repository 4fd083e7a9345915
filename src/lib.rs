//! Génération de labyrinthes parfaits et recherche du plus court chemin par A*.
//!
//! ```
//! use rusty_maze::{build_maze, find_path, Coord};
//!
//! let grid = build_maze(10, 10, Some(42)).unwrap();
//! let path = find_path(&grid, Coord::new(0, 0), Coord::new(9, 9)).unwrap();
//! assert!(path.is_some());
//! ```

pub mod ascii_utils;
pub mod cell;
pub mod codec;
pub mod config;
pub mod direction;
pub mod error;
pub mod generator;
pub mod grid;
pub mod json_utils;
pub mod obstacles;
pub mod path;
pub mod solver;
pub mod walls;

pub use cell::{Cell, CellState, Coord};
pub use codec::{decode_maze, encode_maze};
pub use direction::Direction;
pub use error::MazeError;
pub use generator::MazeGenerator;
pub use grid::Grid;
pub use path::Path;
pub use solver::{find_path, solve_with_stats, SearchStats};

/// Construit un labyrinthe parfait de `rows` x `cols`, creusé depuis (0, 0).
///
/// Avec la même graine, on obtient toujours le même labyrinthe.
pub fn build_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    MazeGenerator::new(seed).generate(rows, cols)
}

/// Vrai si un passage relie `from` à `to` (cellules voisines uniquement).
pub fn wall_open(grid: &Grid, from: Coord, to: Coord) -> Result<bool, MazeError> {
    grid.is_open(&from, &to)
}
