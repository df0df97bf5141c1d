//! Eight-way compass directions.

use std::fmt;

/// A compass direction on the square lattice.
///
/// Variants are declared counterclockwise starting from east, so a
/// quarter turn to the left is two positions forward in [`Direction::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(+1, 0)`
    East,
    /// `(+1, +1)`
    NorthEast,
    /// `(0, +1)`
    North,
    /// `(-1, +1)`
    NorthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    SouthWest,
    /// `(0, -1)`
    South,
    /// `(+1, -1)`
    SouthEast,
}

impl Direction {
    /// All eight directions, counterclockwise from east.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The four axis-aligned directions, counterclockwise from east.
    pub const CARDINALS: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Unit offset `(dx, dy)` for one step in this direction.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::North => (0, 1),
            Direction::NorthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -1),
            Direction::SouthEast => (1, -1),
        }
    }

    /// Rotate a quarter turn counterclockwise (east becomes north).
    pub fn turn_left(self) -> Self {
        Self::ALL[(self.index() + 2) % 8]
    }

    /// Rotate a quarter turn clockwise (east becomes south).
    pub fn turn_right(self) -> Self {
        Self::ALL[(self.index() + 6) % 8]
    }

    /// The reverse heading.
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// `true` for east, north, west and south.
    pub fn is_cardinal(self) -> bool {
        self.index() % 2 == 0
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::East => "E",
            Direction::NorthEast => "NE",
            Direction::North => "N",
            Direction::NorthWest => "NW",
            Direction::West => "W",
            Direction::SouthWest => "SW",
            Direction::South => "S",
            Direction::SouthEast => "SE",
        };
        f.write_str(s)
    }
}
