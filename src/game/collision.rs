//! Axis-aligned collision tests between the bird, the world bounds and pipes.

use super::track::ObstacleTrack;
use super::types::{PipePair, PlayerState};
use crate::core::GameConfig;
use serde::{Deserialize, Serialize};

/// What the bird ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Ground,
    Ceiling,
    UpperPipe,
    LowerPipe,
}

impl Collision {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Ground => "hit the ground",
            Self::Ceiling => "flew off the top",
            Self::UpperPipe => "hit an upper pipe",
            Self::LowerPipe => "hit a lower pipe",
        }
    }
}

/// First collision found, checking bounds before pipes in track order.
///
/// No sweep test: a bird moving further than a pipe's width in one tick can
/// pass through it.
pub fn check(player: &PlayerState, track: &ObstacleTrack, config: &GameConfig) -> Option<Collision> {
    if player.y > config.ground_y() - config.ground_margin {
        return Some(Collision::Ground);
    }
    if player.y < 0.0 {
        return Some(Collision::Ceiling);
    }
    track.iter().find_map(|pair| check_pair(player, pair, config))
}

pub fn collides(player: &PlayerState, track: &ObstacleTrack, config: &GameConfig) -> bool {
    check(player, track, config).is_some()
}

fn check_pair(player: &PlayerState, pair: &PipePair, config: &GameConfig) -> Option<Collision> {
    if (player.x - pair.x).abs() >= pair.width {
        return None;
    }
    if player.y < pair.gap_top_y {
        Some(Collision::UpperPipe)
    } else if player.y + config.player_height > pair.gap_bottom_y {
        Some(Collision::LowerPipe)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f64) -> PlayerState {
        PlayerState {
            x: 57.0,
            y,
            velocity: 0.0,
            has_flapped: false,
        }
    }

    fn track_with(pairs: Vec<PipePair>) -> ObstacleTrack {
        let mut track = ObstacleTrack::default();
        for pair in pairs {
            track.push_back(pair);
        }
        track
    }

    #[test]
    fn test_ground_collision() {
        let config = GameConfig::default();
        let track = ObstacleTrack::default();
        assert_eq!(
            check(&bird_at(config.ground_y()), &track, &config),
            Some(Collision::Ground)
        );
        // Inside the ground margin band
        assert!(collides(&bird_at(config.ground_y() - 20.0), &track, &config));
        assert!(!collides(&bird_at(config.ground_y() - 30.0), &track, &config));
    }

    #[test]
    fn test_ceiling_collision() {
        let config = GameConfig::default();
        let track = ObstacleTrack::default();
        assert_eq!(check(&bird_at(-1.0), &track, &config), Some(Collision::Ceiling));
        assert!(!collides(&bird_at(0.0), &track, &config));
    }

    #[test]
    fn test_upper_pipe_collision() {
        let config = GameConfig::default();
        let track = track_with(vec![PipePair::new(60.0, 150.0, 300.0, 52.0, 320.0)]);
        assert_eq!(check(&bird_at(100.0), &track, &config), Some(Collision::UpperPipe));
    }

    #[test]
    fn test_lower_pipe_collision() {
        let config = GameConfig::default();
        let track = track_with(vec![PipePair::new(60.0, 150.0, 300.0, 52.0, 320.0)]);
        // Bird bottom edge (290 + 24) pokes into the lower pipe
        assert_eq!(check(&bird_at(290.0), &track, &config), Some(Collision::LowerPipe));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let config = GameConfig::default();
        let track = track_with(vec![PipePair::new(60.0, 150.0, 300.0, 52.0, 320.0)]);
        assert!(!collides(&bird_at(200.0), &track, &config));
    }

    #[test]
    fn test_no_horizontal_overlap_is_safe() {
        let config = GameConfig::default();
        // Gap far away from the bird's height, but the pipe is a full width away
        let track = track_with(vec![
            PipePair::new(57.0 + 52.0, 300.0, 380.0, 52.0, 320.0),
            PipePair::new(300.0, 300.0, 380.0, 52.0, 320.0),
        ]);
        assert!(!collides(&bird_at(100.0), &track, &config));
    }

    #[test]
    fn test_behind_bird_overlap() {
        let config = GameConfig::default();
        // |57 - 10| = 47 < 52 still overlaps
        let track = track_with(vec![PipePair::new(10.0, 150.0, 300.0, 52.0, 320.0)]);
        assert!(collides(&bird_at(50.0), &track, &config));
    }
}
