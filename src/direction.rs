/// Les quatre directions cardinales d'une cellule.
///
/// L'ordre de déclaration (North, East, South, West) est aussi l'ordre
/// dans lequel le générateur et le solveur examinent les voisins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Toutes les directions, dans l'ordre N, E, S, O.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];

        &ALL_DIRECTIONS
    }

    /// Fait demi tour (par ex. North -> South).
    /// C'est le mur d'en face chez la cellule voisine.
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Décalage (ligne, colonne) d'un pas dans cette direction.
    /// Les lignes croissent vers le sud, les colonnes vers l'est.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Direction à suivre pour aller de `(dr, dc)`, si le décalage est d'un seul pas.
    pub fn from_offset(dr: isize, dc: isize) -> Option<Self> {
        match (dr, dc) {
            (-1, 0) => Some(Direction::North),
            (0, 1) => Some(Direction::East),
            (1, 0) => Some(Direction::South),
            (0, -1) => Some(Direction::West),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_back() {
        for &dir in Direction::all_dirs() {
            assert_ne!(dir.turn_back(), dir);
            assert_eq!(dir.turn_back().turn_back(), dir);
        }
        assert_eq!(Direction::East.turn_back(), Direction::West);
    }

    #[test]
    fn test_offset_roundtrip() {
        for &dir in Direction::all_dirs() {
            let (dr, dc) = dir.offset();
            assert_eq!(Direction::from_offset(dr, dc), Some(dir));
            let (br, bc) = dir.turn_back().offset();
            assert_eq!((dr + br, dc + bc), (0, 0));
        }
        assert_eq!(Direction::from_offset(1, 1), None);
        assert_eq!(Direction::from_offset(0, 2), None);
        assert_eq!(Direction::from_offset(0, 0), None);
    }
}
