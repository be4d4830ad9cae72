//! The scrolling queue of active pipe pairs.
//!
//! Pairs enter at the back (right) and leave from the front (left), so the
//! queue stays sorted by ascending `x` without ever being reordered.

use super::generation::generate_pipe;
use super::types::{Difficulty, PipePair};
use crate::core::constants::SPAWN_WINDOW_MAX_X;
use crate::core::GameConfig;
use rand::Rng;
use std::collections::VecDeque;

/// What one `advance` call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackEvents {
    pub spawned: bool,
    pub retired: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObstacleTrack {
    pairs: VecDeque<PipePair>,
}

impl ObstacleTrack {
    /// Starting track: two pairs, the first `initial_lead` past the right edge
    /// and the second half a screen behind it.
    pub fn seeded<R: Rng>(difficulty: Difficulty, config: &GameConfig, rng: &mut R) -> Self {
        let first_x = config.screen_width + config.initial_lead;
        let mut track = Self::default();
        for x in [first_x, first_x + config.screen_width / 2.0] {
            let mut pair = generate_pipe(difficulty, config, rng);
            pair.x = x;
            track.push_back(pair);
        }
        track
    }

    /// Append at the back. Callers keep `x` at or past the current back pair.
    pub fn push_back(&mut self, pair: PipePair) {
        debug_assert!(self.pairs.back().map_or(true, |back| back.x <= pair.x));
        self.pairs.push_back(pair);
    }

    /// Evict the leading (leftmost) pair.
    pub fn pop_front(&mut self) -> Option<PipePair> {
        self.pairs.pop_front()
    }

    pub fn front(&self) -> Option<&PipePair> {
        self.pairs.front()
    }

    pub fn back(&self) -> Option<&PipePair> {
        self.pairs.back()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PipePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PipePair> {
        self.pairs.iter_mut()
    }

    pub fn is_sorted(&self) -> bool {
        self.pairs
            .iter()
            .zip(self.pairs.iter().skip(1))
            .all(|(a, b)| a.x <= b.x)
    }

    /// Scroll every pair by `velocity_x`, spawn a successor once the leading
    /// pair crosses into the spawn window, and retire pairs that have fully
    /// left the screen.
    ///
    /// The leading pair spawns exactly once, even when a tick carries it past
    /// the window without landing inside it. A pair is only retired after it
    /// has spawned its successor, so the track never empties.
    pub fn advance<R: Rng>(
        &mut self,
        velocity_x: f64,
        difficulty: Difficulty,
        config: &GameConfig,
        rng: &mut R,
    ) -> TrackEvents {
        let mut events = TrackEvents::default();

        for pair in self.pairs.iter_mut() {
            pair.x += velocity_x;
        }

        let spawn_due = self
            .pairs
            .front()
            .is_some_and(|lead| !lead.spawned_successor && lead.x < SPAWN_WINDOW_MAX_X);
        if spawn_due {
            if let Some(lead) = self.pairs.front_mut() {
                lead.spawned_successor = true;
            }
            let mut pair = generate_pipe(difficulty, config, rng);
            if let Some(back) = self.pairs.back() {
                pair.x = pair.x.max(back.right_edge());
            }
            tracing::trace!(x = pair.x, gap_bottom_y = pair.gap_bottom_y, "spawned pipe pair");
            self.push_back(pair);
            events.spawned = true;
        }

        while self
            .pairs
            .front()
            .is_some_and(|lead| lead.x < -lead.width && lead.spawned_successor)
        {
            self.pairs.pop_front();
            events.retired += 1;
        }
        if events.retired > 0 {
            tracing::trace!(retired = events.retired, remaining = self.len(), "retired pipe pairs");
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_seeded_track_layout() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let track = ObstacleTrack::seeded(Difficulty::Easy, &config, &mut rng);
        assert_eq!(track.len(), 2);
        let xs: Vec<f64> = track.iter().map(|p| p.x).collect();
        assert!((xs[0] - 489.0).abs() < f64::EPSILON);
        assert!((xs[1] - 633.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_advance_scrolls_every_pair() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut track = ObstacleTrack::seeded(Difficulty::Medium, &config, &mut rng);
        let before: Vec<f64> = track.iter().map(|p| p.x).collect();
        let events = track.advance(-5.0, Difficulty::Medium, &config, &mut rng);
        assert_eq!(events, TrackEvents::default());
        for (old, pair) in before.iter().zip(track.iter()) {
            assert!((old - 5.0 - pair.x).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_spawn_in_window() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut track = ObstacleTrack::default();
        track.push_back(PipePair::new(7.0, 100.0, 250.0, 52.0, 320.0));
        track.push_back(PipePair::new(150.0, 100.0, 250.0, 52.0, 320.0));

        let events = track.advance(-4.0, Difficulty::Easy, &config, &mut rng);
        assert!(events.spawned);
        assert_eq!(track.len(), 3);
        assert!(track.front().unwrap().spawned_successor);
        assert!((track.back().unwrap().x - 299.0).abs() < f64::EPSILON);

        // Still inside the window on the next tick, but no second spawn
        let events = track.advance(-2.0, Difficulty::Easy, &config, &mut rng);
        assert!(!events.spawned);
        assert_eq!(track.len(), 3);
    }

    #[test]
    fn test_spawn_when_tick_jumps_past_window() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut track = ObstacleTrack::default();
        track.push_back(PipePair::new(5.0, 100.0, 250.0, 52.0, 320.0));

        // 5.0 -> -1.0 never lands in (0, 5)
        let events = track.advance(-6.0, Difficulty::Hard, &config, &mut rng);
        assert!(events.spawned);
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_retire_off_screen_pair() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut track = ObstacleTrack::default();
        let mut gone = PipePair::new(-50.0, 100.0, 250.0, 52.0, 320.0);
        gone.spawned_successor = true;
        track.push_back(gone);
        track.push_back(PipePair::new(100.0, 100.0, 250.0, 52.0, 320.0));

        let events = track.advance(-4.0, Difficulty::Easy, &config, &mut rng);
        assert_eq!(events.retired, 1);
        assert_eq!(track.len(), 1);
        assert!((track.front().unwrap().x - 96.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spawn_respects_furthest_pair() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut track = ObstacleTrack::default();
        track.push_back(PipePair::new(6.0, 100.0, 250.0, 52.0, 320.0));
        track.push_back(PipePair::new(320.0, 100.0, 250.0, 52.0, 320.0));

        track.advance(-4.0, Difficulty::Easy, &config, &mut rng);
        let back = track.back().unwrap();
        assert!((back.x - (316.0 + 52.0)).abs() < f64::EPSILON);
        assert!(track.is_sorted());
    }

    #[test]
    fn test_long_run_stays_sorted_and_non_empty() {
        let config = GameConfig::default();
        for difficulty in Difficulty::ALL {
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            let mut track = ObstacleTrack::seeded(difficulty, &config, &mut rng);
            for _ in 0..5_000 {
                track.advance(difficulty.pipe_velocity(), difficulty, &config, &mut rng);
                assert!(!track.is_empty());
                assert!(track.is_sorted());
                assert!(track.len() <= 4);
            }
        }
    }
}
