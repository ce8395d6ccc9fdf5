use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::route::Route;
use std::fmt;

/// Pheromone level of every cell after construction or `reset`
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Static wall grid plus the mutable pheromone field over it.
///
/// Both grids are flat buffers sized once at construction, indexed
/// x-outer: cell `(x, y)` lives at `x * length + y`.
#[derive(Clone, Debug)]
pub struct Maze {
    walls: Vec<bool>, // true = open
    pheromone: Vec<f64>,
    width: usize,
    length: usize,
}

/// Pheromone around a cell, scanned in `Direction::NEIGHBOR_ORDER`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurroundingPheromone {
    pub positions: [Coordinate; 4],
    pub pheromone: [f64; 4],
    pub sum: f64,
}

impl SurroundingPheromone {
    /// `(direction, neighbor, pheromone)` triples in scan order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Coordinate, f64)> + '_ {
        Direction::NEIGHBOR_ORDER
            .iter()
            .zip(self.positions.iter().zip(self.pheromone.iter()))
            .map(|(&dir, (&pos, &value))| (dir, pos, value))
    }
}

impl Maze {
    /// Create a maze from column-major wall rows: `layout[x][y]`, true = open
    pub fn new(layout: Vec<Vec<bool>>, width: usize, length: usize) -> Result<Self> {
        if layout.len() != width {
            return Err(MazeError::InvalidParameter(format!(
                "layout has {} columns, expected {}",
                layout.len(),
                width
            )));
        }
        if let Some((x, column)) = layout.iter().enumerate().find(|(_, c)| c.len() != length) {
            return Err(MazeError::InvalidParameter(format!(
                "layout column {} has {} cells, expected {}",
                x,
                column.len(),
                length
            )));
        }
        Self::from_flat(layout.into_iter().flatten().collect(), width, length)
    }

    pub(crate) fn from_flat(walls: Vec<bool>, width: usize, length: usize) -> Result<Self> {
        if width == 0 || length == 0 {
            return Err(MazeError::InvalidParameter(format!(
                "maze dimensions must be positive, got {}x{}",
                width, length
            )));
        }
        if width > i32::MAX as usize || length > i32::MAX as usize {
            return Err(MazeError::InvalidParameter(format!(
                "maze dimensions {}x{} are too large",
                width, length
            )));
        }
        debug_assert_eq!(walls.len(), width * length);

        Ok(Self {
            pheromone: vec![INITIAL_PHEROMONE; walls.len()],
            walls,
            width,
            length,
        })
    }

    /// Horizontal extent
    #[inline]
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Vertical extent
    #[inline]
    pub fn get_length(&self) -> usize {
        self.length
    }

    /// Reinitialize the pheromone field; walls are untouched
    pub fn reset(&mut self) {
        self.pheromone.fill(INITIAL_PHEROMONE);
    }

    /// Buffer index of `pos` if it is inside the grid and open
    #[inline]
    fn index(&self, pos: Coordinate) -> Option<usize> {
        if !pos.x_between(0, self.width as i32) || !pos.y_between(0, self.length as i32) {
            return None;
        }
        let idx = pos.x() as usize * self.length + pos.y() as usize;
        self.walls[idx].then_some(idx)
    }

    /// True iff `pos` is inside the grid and not a wall
    #[inline]
    pub fn in_bounds(&self, pos: Coordinate) -> bool {
        self.index(pos).is_some()
    }

    /// Pheromone at `pos`; 0 outside the maze or on a wall
    #[inline]
    pub fn get_pheromone(&self, pos: Coordinate) -> f64 {
        self.index(pos).map_or(0.0, |idx| self.pheromone[idx])
    }

    /// Neighbor positions and their pheromone, east/north/west/south.
    /// A zero `sum` means no neighbor can be chosen by weight.
    pub fn get_surrounding_pheromone(&self, position: Coordinate) -> SurroundingPheromone {
        let positions = Direction::NEIGHBOR_ORDER.map(|dir| position.add_direction(dir));
        let pheromone = positions.map(|pos| self.get_pheromone(pos));
        SurroundingPheromone {
            positions,
            pheromone,
            sum: pheromone.iter().sum(),
        }
    }

    #[inline]
    fn deposit(&mut self, pos: Coordinate, amount: f64) {
        if let Some(idx) = self.index(pos) {
            self.pheromone[idx] += amount;
        }
    }

    /// Deposit `q / L` on the start cell and on each of the `L` cells
    /// the route visits. Empty routes deposit nothing.
    pub fn add_pheromone_route(&mut self, route: &Route, q: f64) {
        debug_assert!(q >= 0.0, "negative deposit strength {}", q);
        let len = route.size();
        if len == 0 {
            return;
        }
        let amount = q / len as f64;
        for pos in route.positions() {
            self.deposit(pos, amount);
        }
    }

    /// Deposit every route with the same strength
    pub fn add_pheromone_routes<'a, I>(&mut self, routes: I, q: f64)
    where
        I: IntoIterator<Item = &'a Route>,
    {
        for route in routes {
            self.add_pheromone_route(route, q);
        }
    }

    /// Multiply the whole field by `rho`, 0 < rho <= 1
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!(rho > 0.0 && rho <= 1.0, "evaporation factor {} out of range", rho);
        for value in &mut self.pheromone {
            *value *= rho;
        }
    }

    /// Number of open cells
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|&&open| open).count()
    }

    /// Sum of pheromone over open cells
    pub fn total_pheromone(&self) -> f64 {
        self.walls
            .iter()
            .zip(&self.pheromone)
            .filter_map(|(&open, &value)| open.then_some(value))
            .sum()
    }

    /// Pheromone grid one row per y, each value right-aligned in 8 columns.
    /// Values use fixed precision: `decimals = 2` prints `1.00`, not `1.0`.
    pub fn pheromone_table(&self, decimals: usize) -> String {
        let mut out = String::with_capacity(self.length * (self.width * 8 + 1));
        for y in 0..self.length {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let value = self.pheromone[x * self.length + y];
                out.push_str(&format!("{:>8.*}", decimals, value));
            }
        }
        out
    }
}

/// Layout file format: `"<width> <length>"` then one row of 0/1 tokens per y
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} ", self.width, self.length)?;
        for y in 0..self.length {
            for x in 0..self.width {
                let open = self.walls[x * self.length + y];
                write!(f, "{} ", open as u8)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
