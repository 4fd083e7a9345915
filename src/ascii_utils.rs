/*!
 * # Visualisation ASCII du labyrinthe
 *
 * Chaque cellule occupe 3 caractères de large et une ligne de haut ; les murs
 * sont dessinés avec `+`, `---` et `|`. Le départ est marqué `S`, l'arrivée `G`,
 * les cellules du chemin `*`.
 */

use crate::cell::Coord;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::path::Path;

/// Génère une représentation ASCII de la grille.
///
/// # Arguments
///
/// * `grid` - La grille à dessiner.
/// * `path` - Un chemin optionnel à superposer.
/// * `start`, `goal` - Les cellules à marquer `S` et `G`, si elles sont données.
///
/// # Retour
///
/// Une `String` de `2 * rows + 1` lignes, chacune terminée par `\n`.
pub fn render_ascii(grid: &Grid, path: Option<&Path>, start: Option<Coord>, goal: Option<Coord>) -> String {
    let mut out = String::new();

    for r in 0..grid.rows() {
        // murs nord de la rangée
        for c in 0..grid.cols() {
            out.push('+');
            out.push_str(if is_closed(grid, Coord::new(r, c), Direction::North) {
                "---"
            } else {
                "   "
            });
        }
        out.push_str("+\n");

        for c in 0..grid.cols() {
            let coord = Coord::new(r, c);
            out.push(if is_closed(grid, coord, Direction::West) { '|' } else { ' ' });
            out.push(' ');
            out.push(cell_char(coord, path, start, goal));
            out.push(' ');
        }
        let last = Coord::new(r, grid.cols() - 1);
        out.push(if is_closed(grid, last, Direction::East) { '|' } else { ' ' });
        out.push('\n');
    }

    let bottom = grid.rows() - 1;
    for c in 0..grid.cols() {
        out.push('+');
        out.push_str(if is_closed(grid, Coord::new(bottom, c), Direction::South) {
            "---"
        } else {
            "   "
        });
    }
    out.push_str("+\n");
    out
}

fn is_closed(grid: &Grid, coord: Coord, dir: Direction) -> bool {
    grid.cell(&coord).map(|cell| !cell.walls.is_open(dir)).unwrap_or(true)
}

fn cell_char(coord: Coord, path: Option<&Path>, start: Option<Coord>, goal: Option<Coord>) -> char {
    if start == Some(coord) {
        'S'
    } else if goal == Some(coord) {
        'G'
    } else if path.is_some_and(|path| path.contains(&coord)) {
        '*'
    } else {
        ' '
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::find_path;

    #[test]
    fn test_render_closed_grid() {
        let grid = Grid::new(1, 2).unwrap();
        let expected = "\
            +---+---+\n\
            |   |   |\n\
            +---+---+\n";
        assert_eq!(render_ascii(&grid, None, None, None), expected);
    }

    #[test]
    fn test_render_with_path() {
        let mut grid = Grid::new(2, 3).unwrap();
        let passages = [
            (Coord::new(0, 0), Coord::new(0, 1)),
            (Coord::new(0, 1), Coord::new(0, 2)),
            (Coord::new(0, 2), Coord::new(1, 2)),
            (Coord::new(1, 0), Coord::new(1, 1)),
            (Coord::new(0, 0), Coord::new(1, 0)),
        ];
        for (a, b) in &passages {
            grid.open_passage(a, b).unwrap();
        }
        let start = Coord::new(0, 0);
        let goal = Coord::new(1, 2);
        let path = find_path(&grid, start, goal).unwrap().unwrap();
        let expected = "\
            +---+---+---+\n\
            | S   *   * |\n\
            +   +---+   +\n\
            |       | G |\n\
            +---+---+---+\n";
        assert_eq!(render_ascii(&grid, Some(&path), Some(start), Some(goal)), expected);
    }
}
