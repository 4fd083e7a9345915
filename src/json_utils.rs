use serde_json::{json, Value};

use crate::grid::Grid;
use crate::path::Path;

/// Décrit la grille (et éventuellement un chemin) pour une couche d'affichage.
///
/// `walls` donne, ligne par ligne, les murs `[N, E, S, O]` de chaque cellule
/// (`true` = fermé). `path` est une liste de paires `[ligne, colonne]`, ou `null`.
pub fn maze_to_json(grid: &Grid, path: Option<&Path>) -> Value {
    let walls: Vec<Value> = (0..grid.rows())
        .map(|r| {
            grid.coords()
                .filter(|coord| coord.r == r)
                .map(|coord| {
                    grid.cell(&coord)
                        .map(|cell| json!(cell.walls.as_blocked_flags()))
                        .unwrap_or(Value::Null)
                })
                .collect()
        })
        .collect();

    json!({
        "rows": grid.rows(),
        "cols": grid.cols(),
        "walls": walls,
        "path": path.map(path_to_json),
    })
}

pub fn path_to_json(path: &Path) -> Value {
    Value::Array(
        path.cells()
            .iter()
            .map(|coord| json!([coord.r, coord.c]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Coord;
    use crate::solver::find_path;

    #[test]
    fn test_maze_json_shape() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.open_passage(&Coord::new(0, 0), &Coord::new(0, 1)).unwrap();
        let path = find_path(&grid, Coord::new(0, 1), Coord::new(0, 0)).unwrap();

        let value = maze_to_json(&grid, path.as_ref());
        assert_eq!(
            value,
            json!({
                "rows": 1,
                "cols": 2,
                "walls": [[[true, false, true, true], [true, true, true, false]]],
                "path": [[0, 1], [0, 0]],
            })
        );
    }

    #[test]
    fn test_no_path_is_null() {
        let grid = Grid::new(2, 2).unwrap();
        let value = maze_to_json(&grid, None);
        assert_eq!(value["path"], Value::Null);
        assert_eq!(value["walls"].as_array().map(Vec::len), Some(2));
    }
}
