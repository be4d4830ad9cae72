//! Headless simulation runner.
//!
//! Each run drives a real [`Session`] through its public API, so the numbers
//! in the report come from the same tick pipeline the terminal game uses.

use super::autopilot::autopilot_should_flap;
use super::config::{Policy, SimConfig};
use super::report::{RunStats, SimReport};
use crate::core::{FlappyError, GameConfig};
use crate::game::{Collaborators, Session, TickOutcome};
use crate::interfaces::{InputEvent, MemoryHighScoreStore, SilentAudio};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cell::Cell;
use std::rc::Rc;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig, game: &GameConfig) -> Result<SimReport, FlappyError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, game, rng)?;
        tracing::debug!(
            run = run_idx + 1,
            score = stats.score,
            ticks = stats.ticks,
            cause = ?stats.cause,
            "simulated run"
        );
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(all_runs, config))
}

fn simulate_single_run(
    config: &SimConfig,
    game: &GameConfig,
    rng: ChaCha8Rng,
) -> Result<RunStats, FlappyError> {
    // The policy decides before each tick; the session reads the decision
    // through its input source.
    let wants_flap = Rc::new(Cell::new(false));
    let input = {
        let wants_flap = Rc::clone(&wants_flap);
        move || wants_flap.get().then_some(InputEvent::Flap)
    };

    let mut session = Session::new(
        game.clone(),
        config.difficulty,
        rng,
        Collaborators::new(
            input,
            SilentAudio,
            MemoryHighScoreStore::new(config.starting_high_score),
        ),
    )?;
    session.start()?;

    for _ in 0..config.max_ticks_per_run {
        let flap = match (config.policy, session.player(), session.track()) {
            (Policy::Autopilot, Some(player), Some(track)) => {
                autopilot_should_flap(player, track, session.config())
            }
            _ => false,
        };
        wants_flap.set(flap);

        if let TickOutcome::GameOver(summary) = session.tick() {
            return Ok(RunStats {
                score: summary.final_score,
                ticks: summary.ticks,
                cause: Some(summary.cause),
                new_high_score: summary.new_high_score,
            });
        }
    }

    let state = session.state();
    Ok(RunStats {
        score: state.score,
        ticks: state.ticks,
        cause: None,
        new_high_score: state.score > config.starting_high_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Collision, Difficulty};

    #[test]
    fn test_idle_runs_all_hit_the_ground() {
        let config = SimConfig::quick(Difficulty::Easy, Policy::Idle, 3);
        let report = run_simulation(&config, &GameConfig::default()).unwrap();
        assert_eq!(report.num_runs, 5);
        for run in &report.run_stats {
            assert_eq!(run.cause, Some(Collision::Ground));
            assert_eq!(run.ticks, 30);
            assert_eq!(run.score, 0);
        }
        assert_eq!(report.runs_timed_out, 0);
    }

    #[test]
    fn test_autopilot_scores_on_easy() {
        let config = SimConfig {
            num_runs: 3,
            max_ticks_per_run: 1_000,
            ..SimConfig::quick(Difficulty::Easy, Policy::Autopilot, 11)
        };
        let report = run_simulation(&config, &GameConfig::default()).unwrap();
        assert!(report.min_score >= 5, "autopilot scored {}", report.min_score);
    }

    #[test]
    fn test_same_seed_same_report() {
        let config = SimConfig::quick(Difficulty::Hard, Policy::Autopilot, 99);
        let game = GameConfig::default();
        let a = run_simulation(&config, &game).unwrap();
        let b = run_simulation(&config, &game).unwrap();
        assert_eq!(a.run_stats, b.run_stats);
    }

    #[test]
    fn test_invalid_game_config_is_reported() {
        let game = GameConfig {
            screen_height: -1.0,
            ..Default::default()
        };
        let config = SimConfig::quick(Difficulty::Easy, Policy::Idle, 1);
        assert!(matches!(
            run_simulation(&config, &game),
            Err(FlappyError::InvalidConfig { .. })
        ));
    }
}
