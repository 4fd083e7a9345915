use log::debug;

use crate::cell::Coord;
use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::Grid;

/// Lit une carte d'obstacles : une ligne de texte par rangée, `0` = libre,
/// `1` = bloqué. Les espaces entre les chiffres et les lignes vides sont ignorés.
///
/// # Retour
///
/// Une matrice où `true` veut dire bloqué.
pub fn parse_obstacle_map(text: &str) -> Result<Vec<Vec<bool>>, MazeError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(ind, line)| {
            line.chars()
                .filter(|ch| !ch.is_whitespace())
                .map(|ch| match ch {
                    '0' => Ok(false),
                    '1' => Ok(true),
                    other => Err(MazeError::InvalidObstacleMap(format!(
                        "unexpected '{}' on line {}",
                        other,
                        ind + 1
                    ))),
                })
                .collect()
        })
        .collect()
}

impl Grid {
    /// Construit une grille à partir d'une matrice d'obstacles (`true` = bloqué).
    ///
    /// Deux cellules libres voisines sont reliées par un passage ; une cellule
    /// bloquée garde ses quatre murs et n'est donc atteignable depuis aucune autre.
    /// La grille obtenue peut contenir des cycles.
    pub fn from_obstacles(blocked: &[Vec<bool>]) -> Result<Grid, MazeError> {
        let rows = blocked.len();
        let cols = blocked.first().map(Vec::len).unwrap_or(0);
        if let Some((ind, row)) = blocked.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(MazeError::InvalidObstacleMap(format!(
                "row {} has {} cells, expected {}",
                ind + 1,
                row.len(),
                cols
            )));
        }

        let mut grid = Grid::new(rows, cols)?;
        let is_free = |coord: &Coord| !blocked[coord.r][coord.c];
        let coords: Vec<Coord> = grid.coords().collect();
        for coord in coords.into_iter().filter(|coord| is_free(coord)) {
            for dir in [Direction::East, Direction::South] {
                let next = coord
                    .neighbor(dir)
                    .filter(|next| grid.contains(next) && is_free(next));
                if let Some(next) = next {
                    grid.open_passage(&coord, &next)?;
                }
            }
        }

        debug!(
            "obstacle grid {}x{} with {} passages",
            rows,
            cols,
            grid.passage_count()
        );
        Ok(grid)
    }
}
