//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can override it with JSON.
//! Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Player dot radius
    pub player_radius: f32,
    /// Player displacement per tick
    pub player_speed: f32,
    /// Pointer dead-zone radius
    pub dead_zone: f32,

    // === Progression ===
    /// Score per level
    pub points_per_level: u64,
    /// Hazard speed multiplier per level-up (>= 1)
    pub speed_multiplier: f32,
    /// Maximum simultaneous hazards
    pub max_hazards: usize,

    // === Orbits ===
    /// Converts stored hazard speed into radians per second
    pub orbit_speed_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            dead_zone: POINTER_DEAD_ZONE,

            points_per_level: POINTS_PER_LEVEL,
            speed_multiplier: SPEED_MULTIPLIER,
            max_hazards: MAX_HAZARDS,

            orbit_speed_scale: ORBIT_SPEED_SCALE,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON (pretty-printed)
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Return a copy with degenerate values replaced by the nearest usable value
    pub fn sanitized(&self) -> Self {
        let mut t = self.clone();

        if t.points_per_level == 0 {
            log::warn!("points_per_level must be positive, using 1");
            t.points_per_level = 1;
        }
        if t.speed_multiplier.is_nan() || t.speed_multiplier < 1.0 {
            log::warn!("speed_multiplier {} below 1.0, using 1.0", t.speed_multiplier);
            t.speed_multiplier = 1.0;
        }
        if t.player_radius.is_nan() || t.player_radius < 0.0 {
            log::warn!("player_radius {} is negative, using 0", t.player_radius);
            t.player_radius = 0.0;
        }
        if t.player_speed.is_nan() || t.player_speed < 0.0 {
            log::warn!("player_speed {} is negative, using 0", t.player_speed);
            t.player_speed = 0.0;
        }
        if t.dead_zone.is_nan() || t.dead_zone < 0.0 {
            log::warn!("dead_zone {} is negative, using 0", t.dead_zone);
            t.dead_zone = 0.0;
        }
        if t.max_hazards < INITIAL_HAZARD_COUNT {
            log::warn!(
                "max_hazards {} is below the {} starting hazards, using {}",
                t.max_hazards,
                INITIAL_HAZARD_COUNT,
                INITIAL_HAZARD_COUNT
            );
            t.max_hazards = INITIAL_HAZARD_COUNT;
        }
        if !t.orbit_speed_scale.is_finite() {
            log::warn!("orbit_speed_scale is not finite, using default");
            t.orbit_speed_scale = ORBIT_SPEED_SCALE;
        }

        t
    }

    /// Level derived from score
    #[inline]
    pub fn level_for_score(&self, score: u64) -> u32 {
        (score / self.points_per_level.max(1)) as u32 + 1
    }
}
