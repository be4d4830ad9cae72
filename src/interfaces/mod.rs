//! Contracts between the game core and the outside world.
//!
//! A [`Session`](crate::game::Session) is handed one implementation of each
//! trait at construction and never reaches for globals. None of these calls can
//! fail from the core's point of view: collaborators swallow and log their own
//! I/O errors.

pub mod audio;
pub mod input;
pub mod store;

pub use audio::{SilentAudio, TerminalBell};
pub use input::{QueuedInput, ScriptedInput};
pub use store::{FileHighScoreStore, MemoryHighScoreStore};

/// A discrete player action, delivered at most once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Flap (also starts play from the welcome prompt).
    Flap,
    PauseToggle,
    Quit,
}

/// Source of player input, polled once per tick.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

impl<F> InputSource for F
where
    F: FnMut() -> Option<InputEvent>,
{
    fn next_event(&mut self) -> Option<InputEvent> {
        self()
    }
}

/// Fire-and-forget sound cues. Every cue defaults to a no-op.
pub trait AudioNotifier {
    fn on_flap(&mut self) {}
    fn on_hit(&mut self) {}
    fn on_point(&mut self) {}
    fn on_pause_toggle(&mut self, _paused: bool) {}
}

/// Persistent single-number high score.
pub trait HighScoreStore {
    /// Stored high score, or 0 if absent or unreadable.
    fn load(&mut self) -> u32;
    fn save(&mut self, score: u32);
}
