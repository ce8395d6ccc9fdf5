use crate::coordinate::Coordinate;
use crate::direction::Direction;
use std::fmt;

/// Ordered moves taken by one ant from a recorded start
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    start: Coordinate,
    steps: Vec<Direction>,
}

impl Route {
    pub fn new(start: Coordinate) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Build a route from an existing list of moves
    pub fn from_steps(start: Coordinate, steps: Vec<Direction>) -> Self {
        Self { start, steps }
    }

    #[inline]
    pub fn push(&mut self, dir: Direction) {
        self.steps.push(dir);
    }

    /// Number of steps
    #[inline]
    pub fn size(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn directions(&self) -> &[Direction] {
        &self.steps
    }

    /// Every visited coordinate, start first: `size() + 1` items
    pub fn positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        std::iter::once(self.start).chain(self.steps.iter().scan(self.start, |pos, &dir| {
            *pos = pos.add_direction(dir);
            Some(*pos)
        }))
    }

    /// Coordinate reached after replaying every step
    pub fn end(&self) -> Coordinate {
        self.steps
            .iter()
            .fold(self.start, |pos, &dir| pos.add_direction(dir))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.start)?;
        for dir in &self.steps {
            write!(f, " {}", dir)?;
        }
        Ok(())
    }
}
