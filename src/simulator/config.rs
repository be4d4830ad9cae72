//! Simulation configuration.

use crate::game::Difficulty;
use clap::ValueEnum;

/// Who presses the flap button during a simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Never flap.
    Idle,
    /// Follow the gap of the next pipe with [`super::autopilot_should_flap`].
    Autopilot,
}

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    pub difficulty: Difficulty,

    pub policy: Policy,

    /// Ticks per run before it is stopped as a timeout
    pub max_ticks_per_run: u64,

    /// High score each run starts against
    pub starting_high_score: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            difficulty: Difficulty::Easy,
            policy: Policy::Autopilot,
            max_ticks_per_run: 10_000,
            starting_high_score: 0,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch for quick checks.
    pub fn quick(difficulty: Difficulty, policy: Policy, seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            difficulty,
            policy,
            max_ticks_per_run: 2_000,
            ..Default::default()
        }
    }
}
