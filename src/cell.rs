use std::fmt::Display;
use std::str::FromStr;

use crate::direction::Direction;
use crate::error::MazeError;
use crate::walls::Walls;

/// Coordonnée d'une cellule : `r` = ligne (0 en haut), `c` = colonne (0 à gauche).
///
/// L'égalité et le hachage se font par valeur, ce qui permet de s'en servir
/// comme clé dans les ensembles et tables du solveur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub r: usize,
    pub c: usize,
}

impl Coord {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Voisin d'un pas dans `dir`, sans vérifier la borne haute de la grille.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let r = self.r.checked_add_signed(dr)?;
        let c = self.c.checked_add_signed(dc)?;
        Some(Coord::new(r, c))
    }

    /// Direction qui mène de `self` à `other`, si les deux cellules se touchent.
    pub fn direction_to(&self, other: &Coord) -> Option<Direction> {
        let dr = other.r as isize - self.r as isize;
        let dc = other.c as isize - self.c as isize;
        Direction::from_offset(dr, dc)
    }

    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.direction_to(other).is_some()
    }

    /// Distance de Manhattan.
    pub fn manhattan(&self, other: &Coord) -> usize {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c)
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

/// Accepte `"ligne,colonne"`, espaces tolérés autour des nombres.
impl FromStr for Coord {
    type Err = MazeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let comma_pos = value
            .find(',')
            .ok_or_else(|| MazeError::InvalidCoordinate(value.to_string()))?;
        let r_text = value[..comma_pos].trim();
        let r = r_text
            .parse::<usize>()
            .map_err(|_| MazeError::InvalidCoordinate(value.to_string()))?;
        let c_text = value[(comma_pos + 1)..].trim();
        let c = c_text
            .parse::<usize>()
            .map_err(|_| MazeError::InvalidCoordinate(value.to_string()))?;

        Ok(Coord::new(r, c))
    }
}

/// État d'une cellule pendant la génération (visitée ou pas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une configuration de murs et un état indiquant si elle a été visitée.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// L'état de la cellule, utile seulement pendant le creusement.
    pub state: CellState,
}

impl Cell {
    /// Crée une nouvelle instance de `Cell`.
    ///
    /// Initialise les murs à `Closed` et l'état à `NotVisited`.
    pub fn new() -> Self {
        Self {
            walls: Walls::default(),
            state: CellState::NotVisited,
        }
    }

    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
