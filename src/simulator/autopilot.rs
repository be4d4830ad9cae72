//! Reference controller used by the simulator and the end-to-end tests.

use crate::core::GameConfig;
use crate::game::{ObstacleTrack, PlayerState};

/// Distance the autopilot keeps between the bird's feet and the lower pipe.
const CLEARANCE: f64 = 16.0;

/// Flap when the bird is falling (or level) and has sunk below its target:
/// `CLEARANCE` above the lower pipe of the next pair the bird has not cleared.
/// With no pipe ahead it holds mid-way to the ground.
pub fn autopilot_should_flap(player: &PlayerState, track: &ObstacleTrack, config: &GameConfig) -> bool {
    let target = track
        .iter()
        .find(|pair| pair.x > player.x - pair.width)
        .map_or(config.ground_y() / 2.0, |pair| {
            pair.gap_bottom_y - config.player_height - CLEARANCE
        });
    player.velocity >= 0.0 && player.y > target
}
