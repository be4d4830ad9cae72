//! Shared configuration, tuning constants and error types.

pub mod config;
pub mod constants;
pub mod error;

pub use config::GameConfig;
pub use constants::*;
pub use error::FlappyError;
