//! # ACO Maze
//!
//! Ant colony optimisation over a grid maze.
//!
//! Generations of ants walk from a start cell to a goal cell, choosing each
//! step in proportion to the pheromone on neighboring cells. Successful
//! routes are reinforced inversely to their length and the whole field
//! evaporates once per generation, so the colony converges on short paths.

pub mod ant;
pub mod cli;
pub mod coordinate;
pub mod direction;
pub mod error;
pub mod maze;
pub mod route;
pub mod simulation;

pub use ant::Ant;
pub use cli::Args;
pub use coordinate::Coordinate;
pub use direction::Direction;
pub use error::{MazeError, Result};
pub use maze::Maze;
pub use route::Route;
pub use simulation::{SimulationConfig, SimulationEngine};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Coordinate, Direction, Maze, MazeError, Result, Route, SimulationConfig,
        SimulationEngine,
    };
}
