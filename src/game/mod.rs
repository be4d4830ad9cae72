//! Flappy game core: pipe generation, physics, collision, the obstacle track
//! and the session state machine that ties them together.
//!
//! Nothing in here touches the terminal or the filesystem directly; see
//! [`crate::interfaces`] for the collaborators a [`Session`] talks to.

pub mod collision;
pub mod generation;
pub mod physics;
pub mod session;
pub mod track;
pub mod types;

pub use collision::Collision;
pub use generation::generate_pipe;
pub use physics::step;
pub use session::{Collaborators, GameOverSummary, Session, Snapshot, TickOutcome};
pub use track::{ObstacleTrack, TrackEvents};
pub use types::{Difficulty, Phase, PipePair, PlayerState, SessionState};
