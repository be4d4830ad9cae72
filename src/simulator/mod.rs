//! Headless simulator for Monte Carlo analysis of difficulty tuning.
//!
//! Runs many sessions without a terminal, driven by a [`Policy`], and reports
//! score statistics and how runs ended. Runs use real [`crate::game::Session`]s,
//! so results match what a player sees.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::autopilot_should_flap;
pub use config::{Policy, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
