use thiserror::Error;

use crate::cell::Coord;

/// Erreurs remontées par la grille, le codec et les parseurs.
///
/// L'absence de chemin n'en fait pas partie : le solveur renvoie `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {coord} is outside the {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: usize, cols: usize },
    #[error("cells {from} and {to} are not adjacent")]
    NonAdjacent { from: Coord, to: Coord },
    #[error("invalid coordinate text: {0}")]
    InvalidCoordinate(String),
    #[error("invalid obstacle map: {0}")]
    InvalidObstacleMap(String),
    #[error("maze {rows}x{cols} is too large")]
    DimensionsTooLarge { rows: usize, cols: usize },
    #[error("invalid maze code: {0}")]
    InvalidMazeCode(String),
}
