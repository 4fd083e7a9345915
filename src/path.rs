use std::fmt::Display;

use crate::cell::Coord;
use crate::grid::Grid;

/// Chemin renvoyé par le solveur : suite de cellules voisines, du départ à l'arrivée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    /// `cells` ne doit pas être vide ; le solveur est le seul à en construire.
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    pub fn goal(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Nombre de cellules, départ et arrivée compris.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Nombre de pas (passages franchis), soit `len() - 1`.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.cells.contains(coord)
    }

    /// Vérifie que chaque paire consécutive est reliée par un passage ouvert de `grid`.
    pub fn is_valid_in(&self, grid: &Grid) -> bool {
        !self.cells.is_empty()
            && self.cells.iter().all(|coord| grid.contains(coord))
            && self
                .cells
                .windows(2)
                .all(|w| grid.is_open(&w[0], &w[1]).unwrap_or(false))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.cells.iter().map(|coord| coord.to_string()).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}
