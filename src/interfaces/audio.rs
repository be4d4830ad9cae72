//! Audio notifiers. The terminal has no mixer, so the closest thing to sound
//! effects is the bell.

use super::AudioNotifier;
use std::io::{self, Write};

/// Ignores every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioNotifier for SilentAudio {}

/// Rings the terminal bell on hits and points and traces every cue.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn ring(&self) {
        if !self.enabled {
            return;
        }
        let mut stdout = io::stdout();
        // A lost bell is not worth interrupting the frame for.
        let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
    }
}

impl AudioNotifier for TerminalBell {
    fn on_flap(&mut self) {
        tracing::trace!("cue: flap");
    }

    fn on_hit(&mut self) {
        tracing::trace!("cue: hit");
        self.ring();
    }

    fn on_point(&mut self) {
        tracing::trace!("cue: point");
        self.ring();
    }

    fn on_pause_toggle(&mut self, paused: bool) {
        tracing::trace!(paused, "cue: pause toggle");
    }
}
