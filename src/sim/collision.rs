//! Player/hazard collision detection
//!
//! Both shapes are circles: a hit is any center distance strictly below the
//! sum of the radii.

use glam::Vec2;

use super::orbit;
use super::state::{Hazard, Player};
use crate::distance;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Index of the hazard that was hit (insertion order)
    pub hazard_index: usize,
    /// Hazard position at the moment of contact
    pub point: Vec2,
    /// Overlap depth (radius sum minus center distance)
    pub penetration: f32,
}

/// Check one hazard at `time_secs`
pub fn player_hazard_collision(
    player: &Player,
    hazard: &Hazard,
    time_secs: f32,
    speed_scale: f32,
) -> Option<(Vec2, f32)> {
    let pos = orbit::position(hazard, time_secs, speed_scale);
    let reach = player.radius + hazard.collision_radius();
    let dist = distance(player.pos, pos);
    (dist < reach).then_some((pos, reach - dist))
}

/// First hazard (in insertion order) touching the player. Stops at the first hit.
pub fn first_collision(
    player: &Player,
    hazards: &[Hazard],
    time_secs: f32,
    speed_scale: f32,
) -> Option<CollisionResult> {
    hazards.iter().enumerate().find_map(|(hazard_index, hazard)| {
        player_hazard_collision(player, hazard, time_secs, speed_scale).map(
            |(point, penetration)| CollisionResult {
                hazard_index,
                point,
                penetration,
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ORBIT_SPEED_SCALE;

    fn player_at(x: f32, y: f32) -> Player {
        Player {
            pos: Vec2::new(x, y),
            radius: 10.0,
        }
    }

    fn still_hazard(x: f32, y: f32, size: f32) -> Hazard {
        Hazard {
            center: Vec2::new(x, y),
            orbit_radius: 0.0,
            speed: 0.0,
            size,
        }
    }

    #[test]
    fn test_hazard_on_player() {
        let player = player_at(400.0, 300.0);
        let hazard = still_hazard(400.0, 300.0, 20.0);
        let (point, pen) = player_hazard_collision(&player, &hazard, 0.0, ORBIT_SPEED_SCALE).unwrap();
        assert_eq!(point, Vec2::new(400.0, 300.0));
        assert_eq!(pen, 20.0);
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let player = player_at(0.0, 0.0);
        let hazard = still_hazard(20.0, 0.0, 20.0);
        assert!(player_hazard_collision(&player, &hazard, 0.0, ORBIT_SPEED_SCALE).is_none());
    }

    #[test]
    fn test_uses_orbit_position() {
        // Center is far away, but the orbit sweeps over the player at t = 0
        let player = player_at(150.0, 100.0);
        let hazard = Hazard {
            center: Vec2::new(100.0, 100.0),
            orbit_radius: 50.0,
            speed: 0.001,
            size: 10.0,
        };
        assert!(player_hazard_collision(&player, &hazard, 0.0, ORBIT_SPEED_SCALE).is_some());
        // Half a turn later it is on the far side
        let half_turn = std::f32::consts::PI;
        assert!(player_hazard_collision(&player, &hazard, half_turn, ORBIT_SPEED_SCALE).is_none());
    }

    #[test]
    fn test_first_collision_insertion_order() {
        let player = player_at(100.0, 100.0);
        let hazards = [
            still_hazard(500.0, 500.0, 10.0),
            still_hazard(105.0, 100.0, 10.0),
            still_hazard(100.0, 100.0, 10.0),
        ];
        let hit = first_collision(&player, &hazards, 0.0, ORBIT_SPEED_SCALE).unwrap();
        assert_eq!(hit.hazard_index, 1);
    }

    #[test]
    fn test_first_collision_none() {
        let player = player_at(100.0, 100.0);
        let hazards = [still_hazard(500.0, 500.0, 10.0)];
        assert!(first_collision(&player, &hazards, 0.0, ORBIT_SPEED_SCALE).is_none());
        assert!(first_collision(&player, &[], 0.0, ORBIT_SPEED_SCALE).is_none());
    }
}
