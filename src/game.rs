//! Frame-driven game driver
//!
//! The host calls `frame` from its render callback. `frame` returns whether
//! another callback should be requested, so the loop stops re-arming itself
//! as soon as the session leaves `Playing`.

use glam::Vec2;

use crate::Tuning;
use crate::sim::{Bounds, Direction, GamePhase, GameState, InputState, Snapshot, TickOutcome, tick};

/// Game instance holding session and input state
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    /// Host timestamp (ms) when the current session started
    started_at_ms: f64,
    /// Outcome of the most recent frame
    last_outcome: TickOutcome,
}

impl Game {
    pub fn new(bounds: Bounds, tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(bounds, tuning, seed),
            input: InputState::default(),
            started_at_ms: 0.0,
            last_outcome: TickOutcome::Idle,
        }
    }

    /// Start or restart: full reset, then enter `Playing`
    pub fn start(&mut self, now_ms: f64, seed: u64) {
        self.state.restart(seed);
        self.started_at_ms = now_ms;
        self.last_outcome = TickOutcome::Continued { leveled_up: false };
    }

    /// Run one tick for the frame at `now_ms`. Returns whether to keep scheduling.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if self.state.phase != GamePhase::Playing {
            return false;
        }
        let time_secs = ((now_ms - self.started_at_ms) / 1000.0) as f32;
        self.last_outcome = tick(&mut self.state, &self.input, time_secs);
        self.last_outcome.keep_running()
    }

    pub fn last_outcome(&self) -> TickOutcome {
        self.last_outcome
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Playfield resized. Existing hazards keep their positions.
    pub fn resize(&mut self, bounds: Bounds) {
        self.state.set_bounds(bounds);
    }

    pub fn set_key(&mut self, dir: Direction, pressed: bool) {
        self.input.set_key(dir, pressed);
    }

    pub fn set_pointer(&mut self, pos: Option<Vec2>) {
        self.input.set_pointer(pos);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }
}
