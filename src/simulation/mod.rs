pub mod config;
pub mod engine;

pub use config::SimulationConfig;
pub use engine::{GenerationStats, RunSummary, SimulationEngine};
