use crate::cell::{Cell, CellState, Coord};
use crate::direction::Direction;
use crate::error::MazeError;
use crate::walls::Wall;

/// Grille rectangulaire du labyrinthe, stockée ligne par ligne.
///
/// Les dimensions sont fixées à la construction. Les murs entre deux cellules
/// voisines sont toujours modifiés des deux côtés en même temps, ce qui garde
/// la grille symétrique : `is_open(a, b) == is_open(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Crée une grille `rows` x `cols`, tous murs fermés, aucune cellule visitée.
    ///
    /// # Erreurs
    ///
    /// `InvalidDimensions` si l'une des deux dimensions vaut 0,
    /// `DimensionsTooLarge` si les cellules ne tiennent pas en mémoire.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let too_large = MazeError::DimensionsTooLarge { rows, cols };
        let len = rows.checked_mul(cols).ok_or(too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, Cell::new());

        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Vérifie si une cellule est dans la grille.
    pub fn contains(&self, coord: &Coord) -> bool {
        coord.r < self.rows && coord.c < self.cols
    }

    /// Comme `contains`, mais sous forme d'erreur à propager.
    pub fn check_bounds(&self, coord: &Coord) -> Result<(), MazeError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds {
                coord: *coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Récupère une cellule en lecture seule.
    pub fn cell(&self, coord: &Coord) -> Option<&Cell> {
        self.pos_to_ind(coord).and_then(|ind| self.cells.get(ind))
    }

    fn cell_mut(&mut self, coord: &Coord) -> Option<&mut Cell> {
        self.pos_to_ind(coord).and_then(|ind| self.cells.get_mut(ind))
    }

    fn pos_to_ind(&self, coord: &Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.r * self.cols + coord.c)
        } else {
            None
        }
    }

    /// Toutes les coordonnées, ligne par ligne.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Coord::new(r, c)))
    }

    /// Vrai si `a` et `b` sont voisines et que le mur entre elles est ouvert.
    ///
    /// Deux cellules non voisines ne sont jamais reliées : `Ok(false)`.
    pub fn is_open(&self, a: &Coord, b: &Coord) -> Result<bool, MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let Some(dir) = a.direction_to(b) else {
            return Ok(false);
        };

        Ok(self
            .cell(a)
            .map(|cell| cell.walls.is_open(dir))
            .unwrap_or(false))
    }

    /// Ouvre le passage entre `a` et `b`, des deux côtés à la fois.
    ///
    /// Ne fait rien si le passage est déjà ouvert.
    pub fn open_passage(&mut self, a: &Coord, b: &Coord) -> Result<(), MazeError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let dir = a
            .direction_to(b)
            .ok_or(MazeError::NonAdjacent { from: *a, to: *b })?;

        if let Some(cell) = self.cell_mut(a) {
            cell.walls.set(dir, Wall::Open);
        }
        if let Some(cell) = self.cell_mut(b) {
            cell.walls.set(dir.turn_back(), Wall::Open);
        }
        Ok(())
    }

    /// Voisins dans la grille, dans l'ordre N, E, S, O.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::all_dirs()
            .iter()
            .filter_map(move |&dir| coord.neighbor(dir).map(|next| (dir, next)))
            .filter(move |(_, next)| self.contains(next))
    }

    /// Voisins atteignables par un passage ouvert, dans l'ordre N, E, S, O.
    pub fn open_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let walls = self.cell(&coord).map(|cell| cell.walls.clone());
        self.neighbors(coord).filter_map(move |(dir, next)| {
            walls
                .as_ref()
                .filter(|walls| walls.is_open(dir))
                .map(|_| next)
        })
    }

    /// Nombre de passages ouverts (chaque passage compté une fois).
    pub fn passage_count(&self) -> usize {
        self.coords()
            .map(|coord| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        self.cell(&coord)
                            .is_some_and(|cell| cell.walls.is_open(dir))
                    })
                    .filter(|&dir| coord.neighbor(dir).is_some_and(|n| self.contains(&n)))
                    .count()
            })
            .sum()
    }

    pub fn is_visited(&self, coord: &Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_visited)
    }

    pub(crate) fn mark_visited(&mut self, coord: &Coord) {
        if let Some(cell) = self.cell_mut(coord) {
            cell.state = CellState::Visited;
        }
    }

    /// Remet toutes les cellules à `NotVisited`, sans toucher aux murs.
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.state = CellState::NotVisited;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            Grid::new(0, 3),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_rejects_oversized() {
        let (rows, cols) = (1usize << 31, 1usize << 31);
        assert_eq!(
            Grid::new(rows, cols),
            Err(MazeError::DimensionsTooLarge { rows, cols })
        );
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(MazeError::DimensionsTooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn test_new_all_closed() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.passage_count(), 0);
        for coord in grid.coords() {
            assert!(!grid.is_visited(&coord));
            assert_eq!(grid.cell(&coord).unwrap().walls.as_blocked_flags(), [true; 4]);
        }
    }

    #[test]
    fn test_open_passage_is_symmetric() {
        let mut grid = Grid::new(2, 2).unwrap();
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        grid.open_passage(&a, &b).unwrap();
        assert_eq!(grid.is_open(&a, &b), Ok(true));
        assert_eq!(grid.is_open(&b, &a), Ok(true));
        assert!(grid.cell(&a).unwrap().walls.is_open(Direction::East));
        assert!(grid.cell(&b).unwrap().walls.is_open(Direction::West));

        // deuxième ouverture : aucun effet
        grid.open_passage(&b, &a).unwrap();
        assert_eq!(grid.passage_count(), 1);
    }

    #[test]
    fn test_non_adjacent_and_out_of_bounds() {
        let mut grid = Grid::new(3, 3).unwrap();
        let a = Coord::new(0, 0);
        assert_eq!(
            grid.open_passage(&a, &Coord::new(1, 1)),
            Err(MazeError::NonAdjacent {
                from: a,
                to: Coord::new(1, 1)
            })
        );
        assert_eq!(grid.open_passage(&a, &a), Err(MazeError::NonAdjacent { from: a, to: a }));
        assert_eq!(grid.is_open(&a, &Coord::new(2, 2)), Ok(false));
        assert_eq!(
            grid.is_open(&a, &Coord::new(0, 3)),
            Err(MazeError::OutOfBounds {
                coord: Coord::new(0, 3),
                rows: 3,
                cols: 3
            })
        );
        assert!(grid.open_passage(&Coord::new(3, 0), &Coord::new(2, 0)).is_err());
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_neighbors_in_bounds() {
        let grid = Grid::new(2, 3).unwrap();
        let corner: Vec<Coord> = grid.neighbors(Coord::new(0, 0)).map(|(_, n)| n).collect();
        assert_eq!(corner, vec![Coord::new(0, 1), Coord::new(1, 0)]);
        let middle: Vec<Direction> = grid.neighbors(Coord::new(1, 1)).map(|(d, _)| d).collect();
        assert_eq!(middle, vec![Direction::North, Direction::East, Direction::West]);
    }

    #[test]
    fn test_open_neighbors_follow_passages() {
        let mut grid = Grid::new(3, 3).unwrap();
        let center = Coord::new(1, 1);
        grid.open_passage(&center, &Coord::new(1, 2)).unwrap();
        grid.open_passage(&Coord::new(0, 1), &center).unwrap();
        let open: Vec<Coord> = grid.open_neighbors(center).collect();
        assert_eq!(open, vec![Coord::new(0, 1), Coord::new(1, 2)]);
    }

    #[test]
    fn test_visited_flags() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_visited(&Coord::new(1, 0));
        assert!(grid.is_visited(&Coord::new(1, 0)));
        assert!(!grid.is_visited(&Coord::new(5, 5)));
        grid.reset_visited();
        assert!(!grid.is_visited(&Coord::new(1, 0)));
    }
}
