//! Orbit Dodge - An arcade avoidance game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (input, orbits, collisions, progression)
//! - `game`: Frame-driven tick scheduler the platform host calls into
//! - `tuning`: Data-driven game balance
//! - `backdrop`: Decorative particle field behind the playfield

pub mod backdrop;
pub mod game;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player dot radius (pixels)
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Player displacement per tick (pixels)
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Pointer closer than this to the player produces no movement
    pub const POINTER_DEAD_ZONE: f32 = 5.0;

    /// Score needed per level
    pub const POINTS_PER_LEVEL: u64 = 1000;
    /// Angular speed multiplier applied to every hazard on level-up
    pub const SPEED_MULTIPLIER: f32 = 1.08;
    /// Hazard ceiling
    pub const MAX_HAZARDS: usize = 10;
    /// Size of the fixed starting hazard set (the ceiling can't go below it)
    pub const INITIAL_HAZARD_COUNT: usize = 6;

    /// Stored hazard speeds are radians per millisecond
    pub const ORBIT_SPEED_SCALE: f32 = 1000.0;

    /// Nominal frame step used by headless runs (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Unit vector pointing from `from` to `to` (zero if the points coincide)
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Clamp without panicking when `min > max` (degenerate playfields).
/// The lower bound wins in that case.
#[inline]
pub fn clamp_lenient(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
