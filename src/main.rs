use aco_maze::maze::parse_maze;
use aco_maze::prelude::*;
use clap::Parser;
use colored::Colorize;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.validate()?;
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    // Load maze and check endpoints against it
    let mut maze = parse_maze(&args.maze)?;
    if !args.suppress_events {
        println!("{} {}", "Ready reading maze file".green(), args.maze);
    }
    let config = SimulationConfig::from_args(&args, &maze)?;

    // Run colony
    let engine = SimulationEngine::new(config, args.suppress_events);
    let summary = engine.run_simulation(&mut maze, &mut rng);

    if args.print_pheromones {
        println!("{}", maze.pheromone_table(args.decimals));
    }
    engine.print_summary(&summary);

    Ok(())
}
