//! Headless balance simulator.
//!
//! Plays thousands of runs with a random input policy against the real
//! [`RunnerGame`](crate::core::game::RunnerGame) to measure how often runs
//! end in victory, how far they get and how much they score.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunEnd, RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
