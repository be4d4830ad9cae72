//! Flappy data structures: difficulty, bird, pipe pairs and session state.

use crate::core::constants::{LAUNCH_VELOCITY, PLAYER_X_DIVISOR, PLAYER_Y_DIVISOR};
use crate::core::{FlappyError, GameConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty levels. Harder levels narrow the pipe gaps and scroll faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Menu index to difficulty. Unlike a menu cursor, an out-of-range index
    /// is a caller bug and is rejected.
    pub fn from_index(index: usize) -> Result<Self, FlappyError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| FlappyError::InvalidDifficulty(index.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Gap height as a fraction of the screen: S/3, S/5, S/7.
    pub fn gap_divisor(&self) -> f64 {
        match self {
            Self::Easy => 3.0,
            Self::Medium => 5.0,
            Self::Hard => 7.0,
        }
    }

    /// Vertical gap between the upper and lower pipe.
    pub fn gap_offset(&self, screen_height: f64) -> f64 {
        screen_height / self.gap_divisor()
    }

    /// Horizontal pipe velocity per tick (negative = leftward).
    pub fn pipe_velocity(&self) -> f64 {
        match self {
            Self::Easy => -4.0,
            Self::Medium => -5.0,
            Self::Hard => -6.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = FlappyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(FlappyError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// The bird. `x` never changes during a session; y grows downward.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub x: f64,
    pub y: f64,
    /// Vertical velocity in units/tick (positive = falling).
    pub velocity: f64,
    /// Set on the tick a flap was applied, cleared on the next.
    pub has_flapped: bool,
}

impl PlayerState {
    /// Bird at its start position with the launch hop velocity.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            x: (config.screen_width / PLAYER_X_DIVISOR).floor(),
            y: (config.screen_height / PLAYER_Y_DIVISOR).floor(),
            velocity: LAUNCH_VELOCITY,
            has_flapped: false,
        }
    }

    pub fn midpoint_x(&self, config: &GameConfig) -> f64 {
        self.x + config.player_width / 2.0
    }
}

/// One obstacle: an upper and lower pipe sharing a column, with a gap between.
#[derive(Debug, Clone, PartialEq)]
pub struct PipePair {
    /// Left edge.
    pub x: f64,
    /// Lower edge of the upper pipe.
    pub gap_top_y: f64,
    /// Upper edge of the lower pipe.
    pub gap_bottom_y: f64,
    pub width: f64,
    pub height: f64,
    /// Already produced a point.
    pub scored: bool,
    /// Already triggered the spawn of the next pair.
    pub spawned_successor: bool,
}

impl PipePair {
    pub fn new(x: f64, gap_top_y: f64, gap_bottom_y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            gap_top_y,
            gap_bottom_y,
            width,
            height,
            scored: false,
            spawned_successor: false,
        }
    }

    pub fn gap_height(&self) -> f64 {
        self.gap_bottom_y - self.gap_top_y
    }

    pub fn midpoint_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Top of the upper pipe sprite (usually above the screen).
    pub fn upper_sprite_y(&self) -> f64 {
        self.gap_top_y - self.height
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }
}

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first flap.
    Welcome,
    Playing,
    GameOver,
}

/// Score and flags owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub score: u32,
    pub high_score: u32,
    pub difficulty: Difficulty,
    /// Only meaningful while `Playing`.
    pub paused: bool,
    pub phase: Phase,
    /// Unpaused simulation ticks in the current run.
    pub ticks: u64,
}

impl SessionState {
    pub fn new(difficulty: Difficulty, high_score: u32) -> Self {
        Self {
            score: 0,
            high_score,
            difficulty,
            paused: false,
            phase: Phase::Welcome,
            ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_parameters() {
        let config = GameConfig::default();
        let easy = Difficulty::Easy;
        assert!((easy.gap_offset(config.screen_height) - 511.0 / 3.0).abs() < 1e-9);
        assert!((easy.pipe_velocity() - (-4.0)).abs() < f64::EPSILON);

        let hard = Difficulty::Hard;
        assert!((hard.gap_offset(config.screen_height) - 73.0).abs() < 1e-9);
        assert!((hard.pipe_velocity() - (-6.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_harder_means_narrower_and_faster() {
        let h = GameConfig::default().screen_height;
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].gap_offset(h) > pair[1].gap_offset(h));
            assert!(pair[0].pipe_velocity() > pair[1].pipe_velocity());
        }
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(Difficulty::from_index(0), Ok(Difficulty::Easy));
        assert_eq!(Difficulty::from_index(1), Ok(Difficulty::Medium));
        assert_eq!(Difficulty::from_index(2), Ok(Difficulty::Hard));
        assert_eq!(
            Difficulty::from_index(3),
            Err(FlappyError::InvalidDifficulty("3".to_string()))
        );
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!(matches!(
            "insane".parse::<Difficulty>(),
            Err(FlappyError::InvalidDifficulty(_))
        ));
    }

    #[test]
    fn test_player_spawn_position() {
        let player = PlayerState::spawn(&GameConfig::default());
        assert!((player.x - 57.0).abs() < f64::EPSILON);
        assert!((player.y - 255.0).abs() < f64::EPSILON);
        assert!((player.velocity - LAUNCH_VELOCITY).abs() < f64::EPSILON);
        assert!(!player.has_flapped);
    }

    #[test]
    fn test_pipe_pair_geometry() {
        let pair = PipePair::new(100.0, 150.0, 250.0, 52.0, 320.0);
        assert!((pair.gap_height() - 100.0).abs() < f64::EPSILON);
        assert!((pair.midpoint_x() - 126.0).abs() < f64::EPSILON);
        assert!((pair.upper_sprite_y() - (-170.0)).abs() < f64::EPSILON);
        assert!((pair.right_edge() - 152.0).abs() < f64::EPSILON);
        assert!(!pair.scored);
        assert!(!pair.spawned_successor);
    }

    #[test]
    fn test_new_session_state() {
        let state = SessionState::new(Difficulty::Medium, 7);
        assert_eq!(state.phase, Phase::Welcome);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 7);
        assert!(!state.paused);
    }
}
