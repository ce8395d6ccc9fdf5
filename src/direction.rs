use crate::error::MazeError;
use std::fmt;
use std::str::FromStr;

/// 4 fixed compass directions on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    South = 1,
    East = 2,
    West = 3,
}

impl FromStr for Direction {
    type Err = MazeError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            b"north" => Ok(Direction::North),
            b"south" => Ok(Direction::South),
            b"east" => Ok(Direction::East),
            b"west" => Ok(Direction::West),
            _ => Err(MazeError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Order in which neighbors are scanned for pheromone
    pub const NEIGHBOR_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Grid displacement `(dx, dy)`. y grows with the layout file's row number,
    /// so north is the previous row.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}
