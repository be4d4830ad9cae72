//! The game session state machine.
//!
//! A [`Session`] owns the bird, the obstacle track and the score, and moves
//! through `Welcome -> Playing -> GameOver`. The event pump calls
//! [`Session::tick`] once per tick; each call pulls at most one input event
//! from the injected [`InputSource`] and returns a [`TickOutcome`] so the
//! presentation layer can react without the core knowing about it.
//!
//! While `Playing`, one tick runs:
//! 1. pause handling (a toggle or a paused session skips the rest)
//! 2. physics
//! 3. collision (ends the run, persisting the best score)
//! 4. track scroll / spawn / retire
//! 5. scoring for pipes whose midpoint the bird just crossed

use super::collision::{self, Collision};
use super::physics;
use super::track::ObstacleTrack;
use super::types::{Difficulty, Phase, PlayerState, SessionState};
use crate::core::constants::SCORE_WINDOW;
use crate::core::{FlappyError, GameConfig};
use crate::interfaces::{AudioNotifier, HighScoreStore, InputEvent, InputSource};
use rand::Rng;
use serde::Serialize;

/// Result of a finished run, handed to the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameOverSummary {
    pub final_score: u32,
    /// High score after this run.
    pub high_score: u32,
    /// The run beat the high score it started against.
    pub new_high_score: bool,
    pub cause: Collision,
    /// Unpaused ticks the run lasted.
    pub ticks: u64,
}

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No state change (welcome without a flap, paused, or game over).
    Idle,
    /// Welcome -> Playing.
    Started,
    Paused,
    Resumed,
    /// One simulation step ran.
    Advanced { flapped: bool, scored: bool },
    /// Playing -> GameOver.
    GameOver(GameOverSummary),
    /// The player asked to quit; the session is unchanged.
    QuitRequested,
}

/// Read-only view for renderers. `player` and `track` are only present while
/// playing; `summary` only after a game over.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: &'a SessionState,
    pub config: &'a GameConfig,
    pub player: Option<&'a PlayerState>,
    pub track: Option<&'a ObstacleTrack>,
    pub summary: Option<&'a GameOverSummary>,
}

/// The outside world a session talks to.
pub struct Collaborators {
    pub input: Box<dyn InputSource>,
    pub audio: Box<dyn AudioNotifier>,
    pub store: Box<dyn HighScoreStore>,
}

impl Collaborators {
    pub fn new(
        input: impl InputSource + 'static,
        audio: impl AudioNotifier + 'static,
        store: impl HighScoreStore + 'static,
    ) -> Self {
        Self {
            input: Box::new(input),
            audio: Box::new(audio),
            store: Box::new(store),
        }
    }
}

/// Bird and pipes for one run. Dropped at game over.
#[derive(Debug, Clone)]
struct Run {
    player: PlayerState,
    track: ObstacleTrack,
    starting_high_score: u32,
}

pub struct Session<R: Rng> {
    config: GameConfig,
    state: SessionState,
    run: Option<Run>,
    summary: Option<GameOverSummary>,
    rng: R,
    input: Box<dyn InputSource>,
    audio: Box<dyn AudioNotifier>,
    store: Box<dyn HighScoreStore>,
}

impl<R: Rng> Session<R> {
    /// Create a session on the welcome screen. Fails if `config` does not
    /// validate.
    pub fn new(
        config: GameConfig,
        difficulty: Difficulty,
        rng: R,
        collaborators: Collaborators,
    ) -> Result<Self, FlappyError> {
        config.validate()?;
        let Collaborators {
            input,
            audio,
            mut store,
        } = collaborators;
        let high_score = store.load();
        Ok(Self {
            config,
            state: SessionState::new(difficulty, high_score),
            run: None,
            summary: None,
            rng,
            input,
            audio,
            store,
        })
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }

    pub fn player(&self) -> Option<&PlayerState> {
        self.run.as_ref().map(|run| &run.player)
    }

    pub fn track(&self) -> Option<&ObstacleTrack> {
        self.run.as_ref().map(|run| &run.track)
    }

    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.summary.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: &self.state,
            config: &self.config,
            player: self.player(),
            track: self.track(),
            summary: self.summary.as_ref(),
        }
    }

    /// Change difficulty before play starts.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), FlappyError> {
        self.require(Phase::Welcome, "change difficulty")?;
        self.state.difficulty = difficulty;
        Ok(())
    }

    /// Welcome -> Playing.
    pub fn start(&mut self) -> Result<(), FlappyError> {
        self.require(Phase::Welcome, "start")?;
        self.begin_run();
        Ok(())
    }

    /// GameOver -> Playing with the same difficulty.
    pub fn restart(&mut self) -> Result<(), FlappyError> {
        self.require(Phase::GameOver, "restart")?;
        tracing::info!(difficulty = %self.state.difficulty, "restarting session");
        self.begin_run();
        Ok(())
    }

    /// GameOver -> Welcome.
    pub fn return_to_welcome(&mut self) -> Result<(), FlappyError> {
        self.require(Phase::GameOver, "return to the menu")?;
        let high_score = self.store.load();
        self.state = SessionState::new(self.state.difficulty, high_score);
        self.summary = None;
        Ok(())
    }

    /// Run one tick, consuming at most one input event.
    pub fn tick(&mut self) -> TickOutcome {
        let event = self.input.next_event();
        if event == Some(InputEvent::Quit) {
            return TickOutcome::QuitRequested;
        }

        match self.state.phase {
            Phase::Welcome => {
                if event == Some(InputEvent::Flap) {
                    self.begin_run();
                    TickOutcome::Started
                } else {
                    TickOutcome::Idle
                }
            }
            Phase::Playing => self.play_tick(event),
            Phase::GameOver => TickOutcome::Idle,
        }
    }

    fn require(&self, phase: Phase, action: &'static str) -> Result<(), FlappyError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(FlappyError::InvalidTransition {
                phase: self.state.phase,
                action,
            })
        }
    }

    fn begin_run(&mut self) {
        let difficulty = self.state.difficulty;
        let high_score = self.store.load();
        self.state = SessionState {
            phase: Phase::Playing,
            ..SessionState::new(difficulty, high_score)
        };
        self.run = Some(Run {
            player: PlayerState::spawn(&self.config),
            track: ObstacleTrack::seeded(difficulty, &self.config, &mut self.rng),
            starting_high_score: high_score,
        });
        self.summary = None;
        tracing::info!(%difficulty, high_score, "session started");
    }

    fn play_tick(&mut self, event: Option<InputEvent>) -> TickOutcome {
        if event == Some(InputEvent::PauseToggle) {
            self.state.paused = !self.state.paused;
            self.audio.on_pause_toggle(self.state.paused);
            tracing::debug!(paused = self.state.paused, score = self.state.score, "pause toggled");
            return if self.state.paused {
                TickOutcome::Paused
            } else {
                TickOutcome::Resumed
            };
        }
        if self.state.paused {
            return TickOutcome::Idle;
        }

        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Idle;
        };

        let flapped = physics::step(&mut run.player, event == Some(InputEvent::Flap), &self.config);
        if flapped {
            self.audio.on_flap();
        }
        self.state.ticks += 1;

        if let Some(cause) = collision::check(&run.player, &run.track, &self.config) {
            return TickOutcome::GameOver(self.finish(cause));
        }

        let difficulty = self.state.difficulty;
        run.track
            .advance(difficulty.pipe_velocity(), difficulty, &self.config, &mut self.rng);

        // Midpoint window test; `scored` keeps a slow pipe from counting twice.
        let player_mid = run.player.midpoint_x(&self.config);
        let mut scored = false;
        for pair in run.track.iter_mut() {
            let pipe_mid = pair.midpoint_x();
            if pair.scored || player_mid < pipe_mid || player_mid > pipe_mid + SCORE_WINDOW {
                continue;
            }
            pair.scored = true;
            scored = true;
            self.state.score += 1;
            self.audio.on_point();
            if self.state.score > self.state.high_score {
                self.state.high_score = self.state.score;
                self.store.save(self.state.high_score);
                tracing::info!(high_score = self.state.high_score, "new high score");
            }
        }

        TickOutcome::Advanced { flapped, scored }
    }

    fn finish(&mut self, cause: Collision) -> GameOverSummary {
        self.audio.on_hit();

        let score = self.state.score;
        let best = score.max(self.state.high_score);
        self.store.save(best);

        let starting_high_score = self
            .run
            .take()
            .map_or(self.state.high_score, |run| run.starting_high_score);
        let summary = GameOverSummary {
            final_score: score,
            high_score: best,
            new_high_score: score > starting_high_score,
            cause,
            ticks: self.state.ticks,
        };

        self.state.high_score = best;
        self.state.paused = false;
        self.state.phase = Phase::GameOver;
        self.summary = Some(summary);
        tracing::info!(
            score,
            high_score = best,
            ticks = summary.ticks,
            "game over: {}",
            cause.describe()
        );
        summary
    }
}
