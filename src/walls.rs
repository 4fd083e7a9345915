use crate::direction::Direction;

/// État d'un mur : fermé (on ne passe pas) ou ouvert (passage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Open,
    Closed,
}

/// Ensemble des 4 murs d'une cellule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    pub north: Wall,
    pub east: Wall,
    pub south: Wall,
    pub west: Wall,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: Wall::Closed,
            east: Wall::Closed,
            south: Wall::Closed,
            west: Wall::Closed,
        }
    }
}

impl Walls {
    pub fn get(&self, dir: Direction) -> Wall {
        match dir {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, dir: Direction, wall: Wall) {
        match dir {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.get(dir) == Wall::Open
    }

    /// Les murs dans l'ordre [N, E, S, O], `true` voulant dire fermé.
    pub fn as_blocked_flags(&self) -> [bool; 4] {
        [
            self.north == Wall::Closed,
            self.east == Wall::Closed,
            self.south == Wall::Closed,
            self.west == Wall::Closed,
        ]
    }
}
