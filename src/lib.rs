//! Flappy - terminal Flappy Bird.
//!
//! The library holds the game core and its collaborator contracts so they can
//! be driven by the terminal front-end, the headless simulator and tests.

pub mod core;
pub mod game;
pub mod interfaces;
pub mod simulator;
pub mod utils;
