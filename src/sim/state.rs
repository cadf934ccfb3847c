//! Game state and core simulation types
//!
//! The whole session lives in one owned `GameState`; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::hazards::HazardField;
use super::orbit;
use crate::Tuning;
use crate::clamp_lenient;

/// Current phase of the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended on collision
    GameOver,
}

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Point at the given fraction of each axis
    pub fn at_fraction(&self, fx: f32, fy: f32) -> Vec2 {
        Vec2::new(self.width * fx, self.height * fy)
    }
}

/// The player-controlled dot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

impl Player {
    /// Spawn at the playfield center
    pub fn new(bounds: Bounds, radius: f32) -> Self {
        Self {
            pos: bounds.center(),
            radius,
        }
    }

    /// Apply one tick of displacement, then keep the dot inside the playfield
    pub fn apply_intent(&mut self, intent: Vec2, bounds: Bounds) {
        self.pos += intent;
        self.clamp_to(bounds);
    }

    /// Clamp both axes into `[radius, dimension - radius]`
    pub fn clamp_to(&mut self, bounds: Bounds) {
        self.pos.x = clamp_lenient(self.pos.x, self.radius, bounds.width - self.radius);
        self.pos.y = clamp_lenient(self.pos.y, self.radius, bounds.height - self.radius);
    }
}

/// An obstacle orbiting a fixed center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Orbit center
    pub center: Vec2,
    /// Orbit radius
    pub orbit_radius: f32,
    /// Signed angular speed in stored units (sign picks the direction)
    pub speed: f32,
    /// Visual diameter
    pub size: f32,
}

impl Hazard {
    /// Radius used for collision tests
    #[inline]
    pub fn collision_radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for level-up randomness
    pub seed: u64,
    /// Gameplay constants for this session
    pub tuning: Tuning,
    /// Current playfield size
    pub bounds: Bounds,
    /// Current phase
    pub phase: GamePhase,
    /// Score (one point per tick while playing)
    pub score: u64,
    /// Seconds since the session started, as last supplied by the host
    pub time_secs: f32,
    /// Player dot
    pub player: Player,
    /// Hazards and their growth state
    pub hazards: HazardField,
    /// Score and level frozen at game over
    pub final_result: Option<FinalResult>,
}

/// Score/level frozen at the moment of collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub score: u64,
    pub level: u32,
}

impl GameState {
    /// Create a session in the `Menu` phase
    pub fn new(bounds: Bounds, tuning: Tuning, seed: u64) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            player: Player::new(bounds, tuning.player_radius),
            hazards: HazardField::initialize(bounds, seed),
            tuning,
            bounds,
            phase: GamePhase::Menu,
            score: 0,
            time_secs: 0.0,
            final_result: None,
        }
    }

    /// Full reset: player, hazards, score and level; then enter `Playing`
    pub fn restart(&mut self, seed: u64) {
        self.seed = seed;
        self.player = Player::new(self.bounds, self.tuning.player_radius);
        self.hazards = HazardField::initialize(self.bounds, seed);
        self.score = 0;
        self.time_secs = 0.0;
        self.final_result = None;
        self.phase = GamePhase::Playing;
        log::info!(
            "Session started ({}x{}, seed {})",
            self.bounds.width,
            self.bounds.height,
            seed
        );
    }

    /// Level derived from the score. Keeps climbing past the hazard ceiling.
    pub fn level(&self) -> u32 {
        self.tuning.level_for_score(self.score)
    }

    /// Update playfield size. Existing hazards are not rescaled.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Rendering/HUD view of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            score: self.score,
            level: self.level(),
            hazard_level: self.hazards.granted_level(),
            final_result: self.final_result,
            player: CircleView {
                pos: self.player.pos,
                radius: self.player.radius,
            },
            hazards: self
                .hazards
                .iter()
                .map(|h| CircleView {
                    pos: orbit::position(h, self.time_secs, self.tuning.orbit_speed_scale),
                    radius: h.collision_radius(),
                })
                .collect(),
        }
    }
}

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Read-only view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u64,
    /// Derived level (keeps climbing past the hazard ceiling)
    pub level: u32,
    /// Last level that grew the hazard field (stops at the ceiling)
    pub hazard_level: u32,
    pub final_result: Option<FinalResult>,
    pub player: CircleView,
    pub hazards: Vec<CircleView>,
}
