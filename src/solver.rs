use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::{debug, trace};

use crate::cell::Coord;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::path::Path;

/// Compteurs d'une recherche, pour les logs et les tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cellules sorties de la frontière et figées.
    pub expanded: usize,
    /// Entrées poussées dans la file de priorité (ré-insertions comprises).
    pub pushed: usize,
    /// Cellules distinctes atteintes au moins une fois.
    pub discovered: usize,
}

/// Entrée de la frontière.
///
/// `BinaryHeap` est un tas max : l'ordre est inversé pour sortir d'abord le plus
/// petit `f`, puis le plus petit `h` (le plus proche du but), puis la plus petite
/// ligne, puis la plus petite colonne.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenEntry {
    f: usize,
    h: usize,
    g: usize,
    coord: Coord,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.coord.cmp(&self.coord))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Heuristique : distance de Manhattan, admissible et cohérente sur une grille
/// 4-connexe à coût unitaire.
pub fn heuristic(from: &Coord, goal: &Coord) -> usize {
    from.manhattan(goal)
}

/// Plus court chemin de `start` à `goal` par A*.
///
/// `Ok(None)` si aucun passage ne relie les deux cellules.
///
/// # Erreurs
///
/// `OutOfBounds` si `start` ou `goal` est hors de la grille.
pub fn find_path(grid: &Grid, start: Coord, goal: Coord) -> Result<Option<Path>, MazeError> {
    solve_with_stats(grid, start, goal).map(|(path, _)| path)
}

/// Comme `find_path`, avec les compteurs de la recherche.
pub fn solve_with_stats(
    grid: &Grid,
    start: Coord,
    goal: Coord,
) -> Result<(Option<Path>, SearchStats), MazeError> {
    grid.check_bounds(&start)?;
    grid.check_bounds(&goal)?;

    let mut stats = SearchStats::default();
    let mut open = BinaryHeap::new();
    let mut best_g: HashMap<Coord, usize> = HashMap::new();
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut settled: HashSet<Coord> = HashSet::new();

    let h = heuristic(&start, &goal);
    best_g.insert(start, 0);
    open.push(OpenEntry {
        f: h,
        h,
        g: 0,
        coord: start,
    });
    stats.pushed += 1;

    while let Some(current) = open.pop() {
        // entrée périmée : la cellule a été figée ou améliorée depuis
        if settled.contains(&current.coord)
            || best_g.get(&current.coord).is_some_and(|&g| g < current.g)
        {
            continue;
        }
        stats.expanded += 1;

        if current.coord == goal {
            stats.discovered = best_g.len();
            let path = reconstruct_path(&came_from, start, goal);
            debug!(
                "path {} -> {} found: {} steps, {} expanded, {} pushed",
                start,
                goal,
                path.steps(),
                stats.expanded,
                stats.pushed
            );
            return Ok((Some(path), stats));
        }
        settled.insert(current.coord);

        for next in grid.open_neighbors(current.coord) {
            if settled.contains(&next) {
                continue;
            }
            let tentative_g = current.g + 1;
            if best_g.get(&next).is_some_and(|&g| g <= tentative_g) {
                continue;
            }

            trace!("relax {} -> {} (g = {})", current.coord, next, tentative_g);
            came_from.insert(next, current.coord);
            best_g.insert(next, tentative_g);
            let h = heuristic(&next, &goal);
            open.push(OpenEntry {
                f: tentative_g + h,
                h,
                g: tentative_g,
                coord: next,
            });
            stats.pushed += 1;
        }
    }

    stats.discovered = best_g.len();
    debug!(
        "no path {} -> {} ({} expanded, {} pushed)",
        start, goal, stats.expanded, stats.pushed
    );
    Ok((None, stats))
}

/// Remonte les prédécesseurs depuis `goal` puis retourne la liste.
fn reconstruct_path(came_from: &HashMap<Coord, Coord>, start: Coord, goal: Coord) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        match came_from.get(&current) {
            Some(&prev) => {
                cells.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    cells.reverse();
    Path::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::obstacles::parse_obstacle_map;

    fn c(r: usize, col: usize) -> Coord {
        Coord::new(r, col)
    }

    fn open_all(grid: &mut Grid, passages: &[(Coord, Coord)]) {
        for (a, b) in passages {
            grid.open_passage(a, b).unwrap();
        }
    }

    /// Grille 3x3 avec deux routes de (0, 0) vers (1, 2) :
    /// directe par le haut (3 pas) ou par le bas (5 pas).
    fn two_routes() -> Grid {
        let mut grid = Grid::new(3, 3).unwrap();
        open_all(
            &mut grid,
            &[
                (c(0, 0), c(0, 1)),
                (c(0, 1), c(0, 2)),
                (c(0, 2), c(1, 2)),
                (c(0, 0), c(1, 0)),
                (c(1, 0), c(2, 0)),
                (c(2, 0), c(2, 1)),
                (c(2, 1), c(2, 2)),
                (c(2, 2), c(1, 2)),
            ],
        );
        grid
    }

    #[test]
    fn test_shorter_route_wins() {
        let grid = two_routes();
        let path = find_path(&grid, c(0, 0), c(1, 2)).unwrap().unwrap();
        assert_eq!(path.cells(), &[c(0, 0), c(0, 1), c(0, 2), c(1, 2)]);
        assert_eq!(path.steps(), c(0, 0).manhattan(&c(1, 2)));
        assert!(path.is_valid_in(&grid));
    }

    #[test]
    fn test_longer_route_when_short_one_is_cut() {
        let mut grid = Grid::new(3, 3).unwrap();
        open_all(
            &mut grid,
            &[
                (c(0, 0), c(1, 0)),
                (c(1, 0), c(2, 0)),
                (c(2, 0), c(2, 1)),
                (c(2, 1), c(2, 2)),
                (c(2, 2), c(1, 2)),
                (c(0, 1), c(0, 2)),
            ],
        );
        let path = find_path(&grid, c(0, 0), c(1, 2)).unwrap().unwrap();
        assert_eq!(path.steps(), 5);
        assert_eq!(path.goal(), c(1, 2));
    }

    #[test]
    fn test_start_is_goal() {
        let grid = Grid::new(2, 2).unwrap();
        let path = find_path(&grid, c(1, 1), c(1, 1)).unwrap().unwrap();
        assert_eq!(path.cells(), &[c(1, 1)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn test_disconnected_halves() {
        let mut grid = Grid::new(2, 4).unwrap();
        open_all(
            &mut grid,
            &[
                (c(0, 0), c(0, 1)),
                (c(0, 0), c(1, 0)),
                (c(1, 0), c(1, 1)),
                (c(0, 2), c(0, 3)),
                (c(0, 3), c(1, 3)),
                (c(1, 2), c(1, 3)),
            ],
        );
        let (path, stats) = solve_with_stats(&grid, c(0, 0), c(1, 3)).unwrap();
        assert_eq!(path, None);
        assert_eq!(stats.expanded, 4);
    }

    #[test]
    fn test_better_route_reinserts_cell() {
        // (2, 1) est d'abord atteinte par (2, 2) avec g = 5, puis par (1, 1) avec g = 3
        let blocked = parse_obstacle_map("000\n100\n000\n011\n000").unwrap();
        let grid = Grid::from_obstacles(&blocked).unwrap();
        let (path, stats) = solve_with_stats(&grid, c(0, 0), c(4, 2)).unwrap();
        let path = path.unwrap();

        assert_eq!(path.steps(), 8);
        assert!(path.is_valid_in(&grid));
        assert!(path.contains(&c(2, 1)));
        assert_eq!(stats.discovered, 12);
        assert_eq!(stats.pushed, stats.discovered + 1);
        assert_eq!(stats.expanded, 12);
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(
            find_path(&grid, c(0, 0), c(2, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            find_path(&grid, c(0, 9), c(0, 0)),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_tie_break_prefers_lower_row() {
        let mut grid = Grid::new(2, 2).unwrap();
        open_all(
            &mut grid,
            &[
                (c(0, 0), c(0, 1)),
                (c(0, 0), c(1, 0)),
                (c(0, 1), c(1, 1)),
                (c(1, 0), c(1, 1)),
            ],
        );
        let path = find_path(&grid, c(0, 0), c(1, 1)).unwrap().unwrap();
        assert_eq!(path.cells(), &[c(0, 0), c(0, 1), c(1, 1)]);
    }

    #[test]
    fn test_open_room_goes_straight() {
        let mut grid = Grid::new(5, 5).unwrap();
        let coords: Vec<Coord> = grid.coords().collect();
        for coord in coords {
            for next in [Direction::East, Direction::South]
                .into_iter()
                .filter_map(|dir| coord.neighbor(dir))
                .filter(|n| n.r < 5 && n.c < 5)
            {
                grid.open_passage(&coord, &next).unwrap();
            }
        }
        let (path, stats) = solve_with_stats(&grid, c(4, 0), c(0, 4)).unwrap();
        let path = path.unwrap();
        assert_eq!(path.steps(), 8);
        assert!(path.is_valid_in(&grid));
        // avec l'heuristique, on ne fouille pas toute la pièce
        assert!(stats.expanded < 25);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let grid = two_routes();
        let first = find_path(&grid, c(2, 2), c(0, 0)).unwrap();
        let second = find_path(&grid, c(2, 2), c(0, 0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_entry_order() {
        let low = OpenEntry { f: 3, h: 1, g: 2, coord: c(4, 4) };
        let high = OpenEntry { f: 5, h: 0, g: 5, coord: c(0, 0) };
        let closer = OpenEntry { f: 3, h: 0, g: 3, coord: c(9, 9) };
        let mut heap = BinaryHeap::from(vec![high, low, closer]);
        assert_eq!(heap.pop(), Some(closer));
        assert_eq!(heap.pop(), Some(low));
        assert_eq!(heap.pop(), Some(high));
    }
}
