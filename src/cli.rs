use crate::coordinate::Coordinate;
use crate::error::{MazeError, Result};
use clap::Parser;

/// CLI arguments for the maze colony
#[derive(Parser, Debug)]
#[command(name = "aco_maze", about = "🐜 Ant colony shortest-path search over a grid maze")]
pub struct Args {
    /// Path to the maze layout file
    #[arg(short = 'm', long = "maze")]
    pub maze: String,

    /// Start cell as `x,y`
    #[arg(long, default_value = "0,0")]
    pub start: Coordinate,

    /// Goal cell as `x,y` (defaults to the bottom-right cell)
    #[arg(long)]
    pub end: Option<Coordinate>,

    /// Ants per generation
    #[arg(short = 'n', long = "ants", default_value_t = 20)]
    pub ants: u32,

    /// Generations per run
    #[arg(short = 'g', long, default_value_t = 50)]
    pub generations: u32,

    /// Independent runs on the same maze (pheromone reset between runs)
    #[arg(long, default_value_t = 1)]
    pub runs: u32,

    /// Maximum steps per ant before it gives up
    #[arg(long, default_value_t = 10_000)]
    pub max_steps: u32,

    /// Pheromone deposited per successful route, spread over its length
    #[arg(short = 'q', long, default_value_t = 1600.0)]
    pub q: f64,

    /// Fraction of pheromone kept after each generation
    #[arg(long, default_value_t = 0.9)]
    pub rho: f64,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Decimals in the pheromone dump
    #[arg(long, default_value_t = 1)]
    pub decimals: usize,

    /// Print the final pheromone field
    #[arg(long, default_value_t = false)]
    pub print_pheromones: bool,

    /// Suppress per-generation logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Check parameters that do not depend on the maze
    pub fn validate(&self) -> Result<()> {
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(MazeError::InvalidParameter(format!(
                "rho must be in (0, 1], got {}",
                self.rho
            )));
        }
        if !(self.q >= 0.0 && self.q.is_finite()) {
            return Err(MazeError::InvalidParameter(format!(
                "q must be a non-negative number, got {}",
                self.q
            )));
        }
        for (name, value) in [
            ("ants", self.ants),
            ("generations", self.generations),
            ("runs", self.runs),
            ("max-steps", self.max_steps),
        ] {
            if value == 0 {
                return Err(MazeError::InvalidParameter(format!("{} must be positive", name)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["aco_maze", "--maze", "toy.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);

        assert_eq!(args.start, Coordinate::new(0, 0));
        assert_eq!(args.end, None);
        assert_eq!(args.ants, 20);
        assert_eq!(args.rho, 0.9);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_coordinates_parse() {
        let args = parse(&["--start", "1,2", "--end", "9,9"]);

        assert_eq!(args.start, Coordinate::new(1, 2));
        assert_eq!(args.end, Some(Coordinate::new(9, 9)));
        assert!(Args::try_parse_from(["aco_maze", "-m", "x", "--start", "nope"]).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        assert!(parse(&["--rho", "0"]).validate().is_err());
        assert!(parse(&["--rho", "1.5"]).validate().is_err());
        assert!(parse(&["--rho", "1"]).validate().is_ok());
        assert!(parse(&["--q=-1"]).validate().is_err());
        assert!(parse(&["--ants", "0"]).validate().is_err());
        assert!(parse(&["--generations", "0"]).validate().is_err());
    }
}
