//! Errors raised at the boundary of the game core.
//!
//! The simulation itself is closed arithmetic and cannot fail; these cover
//! callers handing it values or requests it does not accept.

use crate::game::types::Phase;
use std::fmt;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlappyError {
    /// A difficulty name or index outside Easy / Medium / Hard.
    InvalidDifficulty(String),
    /// A configuration value that would break the world geometry.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// A session transition requested from a phase that does not allow it.
    InvalidTransition { phase: Phase, action: &'static str },
}

impl fmt::Display for FlappyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDifficulty(value) => {
                write!(f, "invalid difficulty '{}' (expected easy, medium or hard)", value)
            }
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config field '{}': {}", field, reason)
            }
            Self::InvalidTransition { phase, action } => {
                write!(f, "cannot {} while in the {:?} phase", action, phase)
            }
        }
    }
}

impl std::error::Error for FlappyError {}

impl From<FlappyError> for io::Error {
    fn from(err: FlappyError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
