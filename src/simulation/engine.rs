use crate::ant::Ant;
use crate::maze::Maze;
use crate::route::Route;
use crate::simulation::config::SimulationConfig;
use colored::Colorize;
use std::time::{Duration, Instant};

/// Outcome of one generation
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationStats {
    pub run: u32,
    pub generation: u32,
    /// Ants that reached the goal
    pub successful: usize,
    /// Shortest route length among successful ants
    pub shortest: Option<usize>,
    /// Mean route length among successful ants
    pub average: Option<f64>,
}

/// Result of a full simulation
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub generations: Vec<GenerationStats>,
    pub best: Option<Route>,
    pub elapsed: Duration,
}

/// Drives generations of ants over a maze
pub struct SimulationEngine {
    config: SimulationConfig,
    suppress_events: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine
    pub fn new(config: SimulationConfig, suppress_events: bool) -> Self {
        Self {
            config,
            suppress_events,
        }
    }

    /// Let every ant build a route against the current field.
    /// The maze is only read here.
    pub fn construct_routes(&self, maze: &Maze, rng: &mut fastrand::Rng) -> Vec<Route> {
        let cfg = &self.config;
        (0..cfg.ants)
            .filter_map(|id| Ant::new(id, cfg.start).find_route(maze, cfg.end, cfg.max_steps, rng))
            .collect()
    }

    /// One generation: construct all routes, then deposit them and evaporate once
    pub fn run_generation(
        &self,
        maze: &mut Maze,
        run: u32,
        generation: u32,
        rng: &mut fastrand::Rng,
    ) -> (GenerationStats, Vec<Route>) {
        let routes = self.construct_routes(maze, rng);

        maze.add_pheromone_routes(&routes, self.config.q);
        maze.evaporate(self.config.rho);

        let shortest = routes.iter().map(Route::size).min();
        let average = (!routes.is_empty()).then(|| {
            routes.iter().map(Route::size).sum::<usize>() as f64 / routes.len() as f64
        });
        let stats = GenerationStats {
            run,
            generation,
            successful: routes.len(),
            shortest,
            average,
        };
        (stats, routes)
    }

    /// Run every configured run; the pheromone field is reset before each one
    pub fn run_simulation(&self, maze: &mut Maze, rng: &mut fastrand::Rng) -> RunSummary {
        let sim_start = Instant::now();
        let total = self.config.runs.saturating_mul(self.config.generations);
        let mut generations = Vec::with_capacity(total as usize);
        let mut best: Option<Route> = None;

        for run in 0..self.config.runs {
            maze.reset();
            for generation in 0..self.config.generations {
                let (stats, routes) = self.run_generation(maze, run, generation, rng);
                self.log_generation(&stats, maze);

                if let Some(shortest) = routes.into_iter().min_by_key(Route::size) {
                    if best.as_ref().map_or(true, |b| shortest.size() < b.size()) {
                        best = Some(shortest);
                    }
                }
                generations.push(stats);
            }
        }

        RunSummary {
            generations,
            best,
            elapsed: sim_start.elapsed(),
        }
    }

    /// Log generation progress
    #[inline]
    fn log_generation(&self, stats: &GenerationStats, maze: &Maze) {
        if self.suppress_events {
            return;
        }
        let shortest = stats
            .shortest
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        let average = stats
            .average
            .map_or_else(|| "-".to_string(), |a| format!("{:.1}", a));
        println!(
            "{} {} {} {} {}",
            "🐜".yellow(),
            format!("run {} generation {}:", stats.run, stats.generation).bright_blue(),
            format!("{}/{} arrived", stats.successful, self.config.ants).green(),
            format!("shortest={} average={}", shortest, average).cyan(),
            format!("pheromone={:.1}", maze.total_pheromone()).dimmed(),
        );
    }

    /// Print simulation summary
    pub fn print_summary(&self, summary: &RunSummary) {
        let cfg = &self.config;
        match &summary.best {
            Some(route) => println!("{} {}", "Best route:".green().bold(), route),
            None => println!("{}", "No ant reached the goal".red().bold()),
        }

        let best = summary
            .best
            .as_ref()
            .map_or_else(|| "none".to_string(), |r| r.size().to_string());
        println!(
            "\n{}\n{} {:.3} ms {} {} {} {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            "(maze loaded)".dimmed(),
            "|".dimmed(),
            format!("ants={}", cfg.ants).cyan(),
            format!("generations={}", cfg.generations).cyan(),
            format!("q={}", cfg.q).cyan(),
            format!("rho={}", cfg.rho).cyan(),
            format!("best={}", best).cyan(),
        );
    }
}
