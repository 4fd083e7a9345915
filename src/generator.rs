use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::cell::Coord;
use crate::error::MazeError;
use crate::grid::Grid;

/// Générateur de labyrinthes parfaits (un seul chemin entre deux cellules).
///
/// Le générateur possède sa propre source aléatoire, initialisée par une graine.
/// Deux générateurs créés avec la même graine produisent les mêmes labyrinthes.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    rng: StdRng,
    seed: u64,
    origin: Coord,
}

impl MazeGenerator {
    /// Sans graine, on en tire une au hasard (elle reste consultable via `seed()`).
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            origin: Coord::new(0, 0),
        }
    }

    /// Change la cellule de départ du creusement (par défaut (0, 0)).
    pub fn with_origin(mut self, origin: Coord) -> Self {
        self.origin = origin;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Construit une grille `rows` x `cols` et y creuse un labyrinthe.
    pub fn generate(&mut self, rows: usize, cols: usize) -> Result<Grid, MazeError> {
        let mut grid = Grid::new(rows, cols)?;
        let opened = carve(&mut grid, self.origin, &mut self.rng)?;
        debug!(
            "generated {}x{} maze from {} with seed {} ({} passages)",
            rows, cols, self.origin, self.seed, opened
        );
        Ok(grid)
    }
}

/// Creuse un labyrinthe parfait dans `grid` par parcours en profondeur
/// aléatoire, avec une pile explicite.
///
/// La grille doit sortir de `Grid::new` (aucun passage). Chaque passage ouvert
/// relie une cellule déjà visitée à une cellule qui ne l'était pas : le résultat
/// est un arbre couvrant de `rows * cols - 1` passages.
///
/// # Retour
///
/// Le nombre de passages ouverts.
pub(crate) fn carve<R: Rng + ?Sized>(
    grid: &mut Grid,
    origin: Coord,
    rng: &mut R,
) -> Result<usize, MazeError> {
    grid.check_bounds(&origin)?;
    grid.reset_visited();

    let mut opened = 0;
    let mut stack = vec![origin];
    let mut candidates: Vec<Coord> = Vec::with_capacity(4);
    grid.mark_visited(&origin);

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            grid.neighbors(current)
                .map(|(_, next)| next)
                .filter(|next| !grid.is_visited(next)),
        );

        match candidates.choose(rng) {
            Some(&next) => {
                trace!("carve {} -> {}", current, next);
                grid.open_passage(&current, &next)?;
                grid.mark_visited(&next);
                stack.push(next);
                opened += 1;
            }
            None => {
                // cul-de-sac : on revient en arrière
                stack.pop();
            }
        }
    }

    Ok(opened)
}
