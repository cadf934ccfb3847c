//! Hazard field: the fixed starting set plus level-up growth
//!
//! Iteration order is insertion order; collision checks rely on it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{Bounds, Hazard};
use crate::Tuning;
use crate::consts::INITIAL_HAZARD_COUNT;

/// Starting layout: (center fx, center fy, orbit radius as fraction of width, speed, size)
const INITIAL_LAYOUT: [(f32, f32, f32, f32, f32); INITIAL_HAZARD_COUNT] = [
    (0.2, 0.2, 0.12, 0.0006, 40.0),
    (0.8, 0.2, 0.13, -0.0007, 42.0),
    (0.2, 0.8, 0.12, 0.0005, 38.0),
    (0.8, 0.8, 0.11, -0.0008, 45.0),
    (0.5, 0.15, 0.10, 0.00065, 35.0),
    (0.5, 0.85, 0.09, -0.00055, 40.0),
];

/// Spawned hazard centers fall in [SPAWN_MARGIN, SPAWN_MARGIN + SPAWN_SPAN] of each axis
const SPAWN_MARGIN: f32 = 0.2;
const SPAWN_SPAN: f32 = 0.6;
/// Base orbit radius for spawned hazards, as a fraction of width
const SPAWN_ORBIT_BASE: f32 = 0.08;
/// Extra orbit radius per level, as a fraction of width
const SPAWN_ORBIT_PER_LEVEL: f32 = 0.01;
const SPAWN_SPEED_BASE: f32 = 0.0005;
const SPAWN_SPEED_PER_LEVEL: f32 = 0.1;
const SPAWN_SIZE_BASE: f32 = 30.0;
const SPAWN_SIZE_PER_LEVEL: f32 = 2.0;

/// Owns every hazard in the session
#[derive(Debug, Clone)]
pub struct HazardField {
    hazards: Vec<Hazard>,
    /// Last level that granted growth (stops advancing at the ceiling)
    granted_level: u32,
    rng: Pcg32,
}

impl HazardField {
    /// Fixed starting set for the given playfield. Identical every session.
    pub fn initialize(bounds: Bounds, seed: u64) -> Self {
        let hazards = INITIAL_LAYOUT
            .iter()
            .map(|&(fx, fy, fr, speed, size)| Hazard {
                center: bounds.at_fraction(fx, fy),
                orbit_radius: bounds.width * fr,
                speed,
                size,
            })
            .collect();

        Self {
            hazards,
            granted_level: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Build a field from explicit hazards (no growth granted yet)
    pub fn from_hazards(hazards: Vec<Hazard>, seed: u64) -> Self {
        Self {
            hazards,
            granted_level: 1,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.hazards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hazards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hazard> {
        self.hazards.iter()
    }

    pub fn as_slice(&self) -> &[Hazard] {
        &self.hazards
    }

    /// Level recorded by the last successful `level_up`
    pub fn granted_level(&self) -> u32 {
        self.granted_level
    }

    /// Whether another hazard may still be added
    pub fn below_ceiling(&self, tuning: &Tuning) -> bool {
        self.hazards.len() < tuning.max_hazards
    }

    /// Grow the field for `level`.
    ///
    /// Speeds up every existing hazard and appends one randomized hazard.
    /// Does nothing (and does not record the level) when the level is not new
    /// or the ceiling has been reached. Returns whether growth happened.
    pub fn level_up(&mut self, level: u32, bounds: Bounds, tuning: &Tuning) -> bool {
        if level <= self.granted_level || !self.below_ceiling(tuning) {
            return false;
        }
        self.granted_level = level;

        for hazard in &mut self.hazards {
            hazard.speed *= tuning.speed_multiplier;
        }

        let hazard = self.spawn(level, bounds);
        log::debug!(
            "Spawned hazard #{} at ({:.0}, {:.0}) r={:.0} speed={:.5} size={:.0}",
            self.hazards.len() + 1,
            hazard.center.x,
            hazard.center.y,
            hazard.orbit_radius,
            hazard.speed,
            hazard.size
        );
        self.hazards.push(hazard);
        true
    }

    fn spawn(&mut self, level: u32, bounds: Bounds) -> Hazard {
        let level = level as f32;
        let center = Vec2::new(
            bounds.width * SPAWN_MARGIN + self.rng.random::<f32>() * bounds.width * SPAWN_SPAN,
            bounds.height * SPAWN_MARGIN + self.rng.random::<f32>() * bounds.height * SPAWN_SPAN,
        );
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };

        Hazard {
            center,
            orbit_radius: bounds.width * SPAWN_ORBIT_BASE
                + level * SPAWN_ORBIT_PER_LEVEL * bounds.width,
            speed: direction * SPAWN_SPEED_BASE * (1.0 + level * SPAWN_SPEED_PER_LEVEL),
            size: SPAWN_SIZE_BASE + level * SPAWN_SIZE_PER_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_initial_layout() {
        let field = HazardField::initialize(BOUNDS, 7);
        assert_eq!(field.len(), 6);
        let first = field.as_slice()[0];
        assert!((first.center - Vec2::new(160.0, 120.0)).length() < 1e-3);
        assert!((first.orbit_radius - 96.0).abs() < 1e-4);
        assert_eq!(first.size, 40.0);

        // Mixed directions
        assert!(field.iter().any(|h| h.speed > 0.0));
        assert!(field.iter().any(|h| h.speed < 0.0));
    }

    #[test]
    fn test_initial_layout_ignores_seed() {
        let a = HazardField::initialize(BOUNDS, 1);
        let b = HazardField::initialize(BOUNDS, 999);
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_level_up_accelerates_and_spawns() {
        let tuning = Tuning::default();
        let mut field = HazardField::initialize(BOUNDS, 7);
        let before: Vec<f32> = field.iter().map(|h| h.speed).collect();

        assert!(field.level_up(2, BOUNDS, &tuning));
        assert_eq!(field.len(), 7);
        assert_eq!(field.granted_level(), 2);

        for (old, h) in before.iter().zip(field.iter()) {
            assert!((h.speed - old * 1.08).abs() < 1e-9);
            // Direction preserved, magnitude grows
            assert_eq!(h.speed.signum(), old.signum());
            assert!(h.speed.abs() > old.abs());
        }

        let spawned = field.as_slice()[6];
        assert!(spawned.center.x >= 160.0 && spawned.center.x <= 640.0);
        assert!(spawned.center.y >= 120.0 && spawned.center.y <= 480.0);
        assert!((spawned.orbit_radius - (64.0 + 16.0)).abs() < 1e-3);
        assert!((spawned.speed.abs() - 0.0005 * 1.2).abs() < 1e-8);
        assert_eq!(spawned.size, 34.0);
    }

    #[test]
    fn test_level_up_same_level_is_noop() {
        let tuning = Tuning::default();
        let mut field = HazardField::initialize(BOUNDS, 7);
        assert!(field.level_up(2, BOUNDS, &tuning));
        assert!(!field.level_up(2, BOUNDS, &tuning));
        assert_eq!(field.len(), 7);
    }

    #[test]
    fn test_ceiling_blocks_growth_and_level_record() {
        let tuning = Tuning::default();
        let mut field = HazardField::initialize(BOUNDS, 7);
        for level in 2..=5 {
            assert!(field.level_up(level, BOUNDS, &tuning));
        }
        assert_eq!(field.len(), 10);
        let speeds: Vec<f32> = field.iter().map(|h| h.speed).collect();

        assert!(!field.level_up(6, BOUNDS, &tuning));
        assert_eq!(field.len(), 10);
        assert_eq!(field.granted_level(), 5);
        // No acceleration past the ceiling either
        let after: Vec<f32> = field.iter().map(|h| h.speed).collect();
        assert_eq!(speeds, after);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let tuning = Tuning::default();
        let mut a = HazardField::initialize(BOUNDS, 42);
        let mut b = HazardField::initialize(BOUNDS, 42);
        for level in 2..=4 {
            a.level_up(level, BOUNDS, &tuning);
            b.level_up(level, BOUNDS, &tuning);
        }
        assert_eq!(a.as_slice(), b.as_slice());
    }
}
