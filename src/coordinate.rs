use crate::direction::Direction;
use crate::error::MazeError;
use std::fmt;
use std::str::FromStr;

/// Immutable grid position. Components may be negative so that
/// off-map neighbors can be probed without special cases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// `lo <= x < hi`
    #[inline]
    pub const fn x_between(&self, lo: i32, hi: i32) -> bool {
        lo <= self.x && self.x < hi
    }

    /// `lo <= y < hi`
    #[inline]
    pub const fn y_between(&self, lo: i32, hi: i32) -> bool {
        lo <= self.y && self.y < hi
    }

    /// Neighboring coordinate one step in `dir`; saturates at the i32 range
    #[inline]
    pub const fn add_direction(self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.delta();
        Coordinate::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl FromStr for Coordinate {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MazeError::InvalidCoordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Coordinate::new(x, y))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
