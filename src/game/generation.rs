//! Pipe pair generation.

use super::types::{Difficulty, PipePair};
use crate::core::constants::GAP_RANGE_TAIL_FACTOR;
use crate::core::GameConfig;
use rand::Rng;

/// Generate a pipe pair just past the right edge of the screen.
///
/// The lower pipe's top edge is drawn uniformly from
/// `[offset, screen_height - base_height - 1.2 * offset)`, where `offset` is the
/// difficulty's gap height. The upper pipe ends exactly `offset` above it.
/// Consumes one draw from `rng`.
pub fn generate_pipe<R: Rng>(difficulty: Difficulty, config: &GameConfig, rng: &mut R) -> PipePair {
    let offset = difficulty.gap_offset(config.screen_height);
    let max_bottom = config.screen_height - config.base_height - GAP_RANGE_TAIL_FACTOR * offset;

    // Validated configs always leave a range; fall back to the top of it otherwise.
    let gap_bottom_y = if max_bottom > offset {
        rng.gen_range(offset..max_bottom)
    } else {
        offset
    };

    PipePair::new(
        config.screen_width + config.spawn_margin,
        gap_bottom_y - offset,
        gap_bottom_y,
        config.pipe_width,
        config.pipe_height,
    )
}
