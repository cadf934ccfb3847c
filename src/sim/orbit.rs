//! Orbit motion model
//!
//! A hazard's position is a pure function of its orbit and the elapsed
//! session time. Nothing here mutates state.

use glam::Vec2;
use std::f32::consts::TAU;

use super::state::Hazard;
use crate::polar_to_cartesian;

/// Orbit angle (radians) at `time_secs`
#[inline]
pub fn angle(hazard: &Hazard, time_secs: f32, speed_scale: f32) -> f32 {
    time_secs * hazard.speed * speed_scale
}

/// Hazard position at `time_secs`
#[inline]
pub fn position(hazard: &Hazard, time_secs: f32, speed_scale: f32) -> Vec2 {
    hazard.center + polar_to_cartesian(hazard.orbit_radius, angle(hazard, time_secs, speed_scale))
}

/// Seconds per full revolution, `None` for a stationary hazard
pub fn period(hazard: &Hazard, speed_scale: f32) -> Option<f32> {
    let omega = (hazard.speed * speed_scale).abs();
    if omega > 0.0 && omega.is_finite() {
        Some(TAU / omega)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ORBIT_SPEED_SCALE;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn hazard(speed: f32, orbit_radius: f32) -> Hazard {
        Hazard {
            center: Vec2::new(400.0, 300.0),
            orbit_radius,
            speed,
            size: 20.0,
        }
    }

    #[test]
    fn test_position_at_time_zero() {
        let h = hazard(0.0006, 50.0);
        let p = position(&h, 0.0, ORBIT_SPEED_SCALE);
        assert!((p - Vec2::new(450.0, 300.0)).length() < 1e-4);
    }

    #[test]
    fn test_quarter_turn() {
        // 0.001 * 1000 = 1 rad/s, so t = PI/2 is a quarter turn
        let h = hazard(0.001, 50.0);
        let p = position(&h, PI / 2.0, ORBIT_SPEED_SCALE);
        assert!((p - Vec2::new(400.0, 350.0)).length() < 1e-3);
    }

    #[test]
    fn test_sign_sets_direction() {
        let cw = hazard(0.001, 50.0);
        let ccw = hazard(-0.001, 50.0);
        let a = position(&cw, 0.5, ORBIT_SPEED_SCALE);
        let b = position(&ccw, 0.5, ORBIT_SPEED_SCALE);
        assert!(a.y > 300.0);
        assert!(b.y < 300.0);
        assert!((a.x - b.x).abs() < 1e-3);
    }

    #[test]
    fn test_zero_radius_stays_at_center() {
        let h = hazard(0.0008, 0.0);
        for t in [0.0, 1.3, 17.0] {
            assert_eq!(position(&h, t, ORBIT_SPEED_SCALE), h.center);
        }
    }

    #[test]
    fn test_period_stationary() {
        assert!(period(&hazard(0.0, 10.0), ORBIT_SPEED_SCALE).is_none());
        let p = period(&hazard(-0.001, 10.0), ORBIT_SPEED_SCALE).unwrap();
        assert!((p - TAU).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_orbit_is_periodic(
            t in 0.0f32..60.0,
            speed in prop_oneof![-0.002f32..-0.0003, 0.0003f32..0.002],
            radius in 0.0f32..200.0,
        ) {
            let h = hazard(speed, radius);
            let p = period(&h, ORBIT_SPEED_SCALE).unwrap();
            let a = position(&h, t, ORBIT_SPEED_SCALE);
            let b = position(&h, t + p, ORBIT_SPEED_SCALE);
            prop_assert!((a - b).length() < 0.05, "{:?} vs {:?}", a, b);
        }

        #[test]
        fn prop_distance_from_center_is_radius(
            t in 0.0f32..120.0,
            speed in -0.002f32..0.002,
            radius in 0.0f32..200.0,
        ) {
            let h = hazard(speed, radius);
            let d = (position(&h, t, ORBIT_SPEED_SCALE) - h.center).length();
            prop_assert!((d - radius).abs() < 1e-2);
        }
    }
}
