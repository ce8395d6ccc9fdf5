pub mod maze;
pub mod parser;

pub use maze::{Maze, SurroundingPheromone, INITIAL_PHEROMONE};
pub use parser::{parse_maze, parse_maze_from_str};
