//! Simulation configuration.

use crate::redemption::BonusState;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per run before it counts as timed out
    pub max_ticks_per_run: u64,

    /// Per-frame chance of running into a hazard
    pub hazard_chance: f64,

    /// Per-frame chance of picking up a gem
    pub gem_chance: f64,

    /// Per-frame chance of picking up a letter
    pub letter_chance: f64,

    /// Chance the player pops a ready shield just before a hit
    pub reaction_chance: f64,

    /// Permanent bonuses every run starts with
    pub bonus: BonusState,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 60 * 60 * 10, // ten minutes at ~60 FPS
            hazard_chance: 0.002,
            gem_chance: 0.02,
            letter_chance: 0.002,
            reaction_chance: 0.5,
            bonus: BonusState::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small deterministic batch for tests.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 20,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
