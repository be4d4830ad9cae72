//! World geometry and tuning shared by the core and its collaborators.

use super::constants::{CONFIG_FILE, GAP_RANGE_TAIL_FACTOR, TICKS_PER_SECOND};
use super::error::FlappyError;
use crate::game::types::Difficulty;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Screen size, sprite sizes and margins, in world units (pixels of the
/// classic 289x511 playfield).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,
    /// Ground line as a fraction of the screen height.
    pub ground_ratio: f64,
    pub tick_rate: u32,
    pub player_width: f64,
    pub player_height: f64,
    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Height of the ground (base) sprite.
    pub base_height: f64,
    /// The bird hits the ground once it is this close to the ground line.
    pub ground_margin: f64,
    /// New pipes appear this far past the right edge.
    pub spawn_margin: f64,
    /// Extra distance before the first seeded pipe.
    pub initial_lead: f64,
    /// Ring the terminal bell on hits and points.
    pub bell: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 289.0,
            screen_height: 511.0,
            ground_ratio: 0.8,
            tick_rate: TICKS_PER_SECOND,
            player_width: 34.0,
            player_height: 24.0,
            pipe_width: 52.0,
            pipe_height: 320.0,
            base_height: 112.0,
            ground_margin: 25.0,
            spawn_margin: 10.0,
            initial_lead: 200.0,
            bell: true,
        }
    }
}

impl GameConfig {
    /// Load `~/.flappy/config.json`, falling back to defaults when the file is
    /// missing or unreadable, then validate the result.
    pub fn load() -> Result<Self, FlappyError> {
        let config: GameConfig = match persistence::save_path(CONFIG_FILE) {
            Ok(path) => persistence::load_json_or_default(&path),
            Err(_) => GameConfig::default(),
        };
        tracing::debug!(?config, "loaded game config");
        config.validate()?;
        Ok(config)
    }

    /// Y coordinate of the ground line.
    pub fn ground_y(&self) -> f64 {
        self.screen_height * self.ground_ratio
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Reject geometry the generator or collision rules cannot work with.
    pub fn validate(&self) -> Result<(), FlappyError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(FlappyError::InvalidConfig {
                    field,
                    reason: "must be positive",
                });
            }
        }
        if self.ground_ratio.is_nan() || self.ground_ratio <= 0.0 || self.ground_ratio > 1.0 {
            return Err(FlappyError::InvalidConfig {
                field: "ground_ratio",
                reason: "must be in (0, 1]",
            });
        }
        if self.tick_rate == 0 {
            return Err(FlappyError::InvalidConfig {
                field: "tick_rate",
                reason: "must be positive",
            });
        }
        let non_negative = [
            ("base_height", self.base_height),
            ("ground_margin", self.ground_margin),
            ("spawn_margin", self.spawn_margin),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(FlappyError::InvalidConfig {
                    field,
                    reason: "must not be negative",
                });
            }
        }
        if !self.initial_lead.is_finite() {
            return Err(FlappyError::InvalidConfig {
                field: "initial_lead",
                reason: "must be finite",
            });
        }
        // The bird rests at ground_y - player_height; the ground band must reach it.
        if self.ground_margin <= self.player_height {
            return Err(FlappyError::InvalidConfig {
                field: "ground_margin",
                reason: "must exceed player_height",
            });
        }
        for difficulty in Difficulty::ALL {
            let offset = difficulty.gap_offset(self.screen_height);
            let max_bottom =
                self.screen_height - self.base_height - GAP_RANGE_TAIL_FACTOR * offset;
            if max_bottom <= offset {
                return Err(FlappyError::InvalidConfig {
                    field: "base_height",
                    reason: "leaves no room to place a pipe gap",
                });
            }
            if offset <= self.player_height {
                return Err(FlappyError::InvalidConfig {
                    field: "player_height",
                    reason: "bird does not fit through the narrowest gap",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_playfield() {
        let config = GameConfig::default();
        assert!((config.screen_width - 289.0).abs() < f64::EPSILON);
        assert!((config.screen_height - 511.0).abs() < f64::EPSILON);
        assert!((config.ground_y() - 408.8).abs() < 1e-9);
        assert_eq!(config.tick_rate, 32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_micros(31_250));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        let config = GameConfig {
            tick_rate: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(FlappyError::InvalidConfig {
                field: "tick_rate",
                reason: "must be positive",
            })
        );
    }

    #[test]
    fn test_rejects_negative_screen() {
        let config = GameConfig {
            screen_height: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_base_that_swallows_gaps() {
        let config = GameConfig {
            base_height: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlappyError::InvalidConfig {
                field: "base_height",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_ground_band_the_bird_cannot_reach() {
        let config = GameConfig {
            player_height: 30.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(FlappyError::InvalidConfig {
                field: "ground_margin",
                reason: "must exceed player_height",
            })
        );

        let config = GameConfig {
            ground_margin: 24.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_margins_name_their_field() {
        let config = GameConfig {
            spawn_margin: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlappyError::InvalidConfig {
                field: "spawn_margin",
                ..
            })
        ));

        let config = GameConfig {
            ground_margin: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlappyError::InvalidConfig {
                field: "ground_margin",
                reason: "must not be negative",
            })
        ));
    }

    #[test]
    fn test_rejects_non_finite_initial_lead() {
        for initial_lead in [f64::NAN, f64::INFINITY] {
            let config = GameConfig {
                initial_lead,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(FlappyError::InvalidConfig {
                    field: "initial_lead",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"bell": false}"#).unwrap();
        assert!(!config.bell);
        assert!((config.pipe_width - 52.0).abs() < f64::EPSILON);
    }
}
