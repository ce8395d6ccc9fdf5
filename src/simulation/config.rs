use crate::cli::Args;
use crate::coordinate::Coordinate;
use crate::error::{MazeError, Result};
use crate::maze::Maze;

/// Validated parameters for a colony run on a specific maze
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub start: Coordinate,
    pub end: Coordinate,
    pub ants: u32,
    pub generations: u32,
    pub runs: u32,
    pub max_steps: u32,
    pub q: f64,
    pub rho: f64,
}

impl SimulationConfig {
    /// Build from CLI arguments; start and end must be open cells of `maze`
    pub fn from_args(args: &Args, maze: &Maze) -> Result<Self> {
        args.validate()?;
        let end = args.end.unwrap_or_else(|| {
            Coordinate::new(maze.get_width() as i32 - 1, maze.get_length() as i32 - 1)
        });

        for (name, pos) in [("start", args.start), ("end", end)] {
            if !maze.in_bounds(pos) {
                return Err(MazeError::InvalidParameter(format!(
                    "{} {} is not an open cell of the {}x{} maze",
                    name,
                    pos,
                    maze.get_width(),
                    maze.get_length()
                )));
            }
        }

        Ok(Self {
            start: args.start,
            end,
            ants: args.ants,
            generations: args.generations,
            runs: args.runs,
            max_steps: args.max_steps,
            q: args.q,
            rho: args.rho,
        })
    }
}
