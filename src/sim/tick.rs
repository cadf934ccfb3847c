//! Per-frame simulation tick
//!
//! One call advances the session by exactly one frame: sample input, move the
//! player, score and progress, then test collisions.

use super::collision::first_collision;
use super::input::{InputState, sample_intent};
use super::state::{FinalResult, GamePhase, GameState};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Session is not `Playing`; nothing was simulated
    Idle,
    /// Tick completed and the session continues
    Continued {
        /// The hazard field grew this tick
        leveled_up: bool,
    },
    /// Player hit a hazard; the session is now `GameOver`
    Collided {
        hazard_index: usize,
        result: FinalResult,
    },
}

impl TickOutcome {
    /// Whether the host should schedule another tick
    pub fn keep_running(&self) -> bool {
        matches!(self, TickOutcome::Continued { .. })
    }
}

/// Advance the session by one frame.
///
/// `time_secs` is the elapsed session time supplied by the host; hazard
/// positions are derived from it directly.
pub fn tick(state: &mut GameState, input: &InputState, time_secs: f32) -> TickOutcome {
    if state.phase != GamePhase::Playing {
        return TickOutcome::Idle;
    }
    state.time_secs = time_secs;

    // Input and movement
    let intent = sample_intent(
        input,
        state.player.pos,
        state.tuning.player_speed,
        state.tuning.dead_zone,
    );
    state.player.apply_intent(intent, state.bounds);

    // Score and progression
    state.score += 1;
    let level = state.level();
    let leveled_up = level > state.hazards.granted_level()
        && state.hazards.level_up(level, state.bounds, &state.tuning);
    if leveled_up {
        log::info!(
            "Level {} reached at score {} ({} hazards)",
            level,
            state.score,
            state.hazards.len()
        );
    }

    // Collisions (first hit in insertion order ends the run)
    if let Some(hit) = first_collision(
        &state.player,
        state.hazards.as_slice(),
        time_secs,
        state.tuning.orbit_speed_scale,
    ) {
        let result = FinalResult {
            score: state.score,
            level,
        };
        state.final_result = Some(result);
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over: hit hazard {} at ({:.0}, {:.0}), score {}, level {}",
            hit.hazard_index,
            hit.point.x,
            hit.point.y,
            result.score,
            result.level
        );
        return TickOutcome::Collided {
            hazard_index: hit.hazard_index,
            result,
        };
    }

    TickOutcome::Continued { leveled_up }
}
