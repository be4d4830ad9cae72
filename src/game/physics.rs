//! Vertical motion of the bird.

use super::types::PlayerState;
use crate::core::constants::{FLAP_IMPULSE, GRAVITY, MAX_FALL_VELOCITY};
use crate::core::GameConfig;

/// Advance the bird by one tick. Returns true if a flap was applied.
///
/// A flap only takes effect below the ceiling (`y > 0`) and replaces the
/// velocity outright; otherwise gravity accelerates the fall up to
/// `MAX_FALL_VELOCITY`. The move is clamped so the bird stops at the ground
/// line instead of sinking through it before the collision check runs.
pub fn step(player: &mut PlayerState, flap_requested: bool, config: &GameConfig) -> bool {
    let flapped = flap_requested && player.y > 0.0;

    if flapped {
        player.velocity = FLAP_IMPULSE;
    } else if player.velocity < MAX_FALL_VELOCITY {
        player.velocity = (player.velocity + GRAVITY).min(MAX_FALL_VELOCITY);
    }
    player.has_flapped = flapped;

    let room_to_ground = config.ground_y() - player.y - config.player_height;
    player.y += player.velocity.min(room_to_ground);

    flapped
}
