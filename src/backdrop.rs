//! Decorative background: a vertical gradient and drifting glow particles
//!
//! Purely visual. Nothing here feeds back into the simulation.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::sim::Bounds;

/// Particles seeded per session
pub const PARTICLE_COUNT: usize = 50;
/// Gradient stops, top to bottom
pub const GRADIENT_TOP: &str = "#0f1a2e";
pub const GRADIENT_BOTTOM: &str = "#000811";
/// Particle glow color
pub const GLOW_COLOR: &str = "#00d4ff";
/// Particles that fall off the bottom reappear here
const WRAP_Y: f32 = -10.0;

/// A single background particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub pos: Vec2,
    pub radius: f32,
    /// Downward drift per frame
    pub speed_y: f32,
    pub opacity: f32,
}

/// Particle field behind the playfield
#[derive(Debug, Clone)]
pub struct Backdrop {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl Backdrop {
    pub fn new(bounds: Bounds, seed: u64) -> Self {
        let mut backdrop = Self {
            particles: Vec::with_capacity(PARTICLE_COUNT),
            rng: Pcg32::seed_from_u64(seed),
        };
        backdrop.reset(bounds);
        backdrop
    }

    /// Scatter a fresh set of particles across the playfield
    pub fn reset(&mut self, bounds: Bounds) {
        let rng = &mut self.rng;
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.random::<f32>() * bounds.width,
                    rng.random::<f32>() * bounds.height,
                ),
                radius: rng.random::<f32>() * 3.0 + 1.0,
                speed_y: rng.random::<f32>() * 0.5 + 0.2,
                opacity: rng.random::<f32>() * 0.5 + 0.3,
            })
            .collect();
    }

    /// Drift every particle down one frame, wrapping past the bottom edge
    pub fn step(&mut self, bounds: Bounds) {
        for p in &mut self.particles {
            p.pos.y += p.speed_y;
            if p.pos.y > bounds.height {
                p.pos.y = WRAP_Y;
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
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
    fn test_seeded_within_ranges() {
        let backdrop = Backdrop::new(BOUNDS, 11);
        assert_eq!(backdrop.particles().len(), PARTICLE_COUNT);
        for p in backdrop.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0);
            assert!(p.radius >= 1.0 && p.radius <= 4.0);
            assert!(p.speed_y >= 0.2 && p.speed_y <= 0.7);
            assert!(p.opacity >= 0.3 && p.opacity <= 0.8);
        }
    }

    #[test]
    fn test_step_drifts_down() {
        let mut backdrop = Backdrop::new(BOUNDS, 11);
        let before: Vec<Particle> = backdrop.particles().to_vec();
        backdrop.step(BOUNDS);
        for (old, new) in before.iter().zip(backdrop.particles()) {
            assert_eq!(new.pos.x, old.pos.x);
            if old.pos.y + old.speed_y <= 600.0 {
                assert_eq!(new.pos.y, old.pos.y + old.speed_y);
            }
        }
    }

    #[test]
    fn test_wraps_past_bottom() {
        let mut backdrop = Backdrop::new(BOUNDS, 11);
        // Enough frames for even the slowest particle to cross the screen
        for _ in 0..4000 {
            backdrop.step(BOUNDS);
            assert!(backdrop.particles().iter().all(|p| p.pos.y <= 600.0 && p.pos.y >= WRAP_Y));
        }
    }

    #[test]
    fn test_reset_reseeds_field() {
        let mut backdrop = Backdrop::new(BOUNDS, 11);
        let first: Vec<Particle> = backdrop.particles().to_vec();
        backdrop.reset(BOUNDS);
        assert_eq!(backdrop.particles().len(), PARTICLE_COUNT);
        assert_ne!(backdrop.particles(), first.as_slice());
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Backdrop::new(BOUNDS, 3);
        let b = Backdrop::new(BOUNDS, 3);
        assert_eq!(a.particles(), b.particles());
    }
}
