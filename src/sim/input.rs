//! Input state and movement intent
//!
//! Hosts push raw events through the setters; the tick samples the result
//! once per frame. Pointer input takes priority over keys.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four directional keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit step in screen coordinates (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// Latest raw input, written by event handlers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Active touch/pointer position in playfield coordinates
    pub pointer: Option<Vec2>,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set_key(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn is_pressed(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Pointer start/move sets a position; pointer end clears it
    pub fn set_pointer(&mut self, pos: Option<Vec2>) {
        self.pointer = pos;
    }

    /// Release everything (e.g. on window blur)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Per-tick player displacement.
///
/// Pointer: unit vector toward the pointer times `speed`, or zero inside the
/// dead-zone. Keys: raw per-axis sum (diagonals are not renormalized).
pub fn sample_intent(input: &InputState, player_pos: Vec2, speed: f32, dead_zone: f32) -> Vec2 {
    if let Some(target) = input.pointer {
        let delta = target - player_pos;
        let dist = delta.length();
        if dist > dead_zone && dist > 0.0 {
            return delta / dist * speed;
        }
        return Vec2::ZERO;
    }

    [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ]
    .into_iter()
    .filter(|&dir| input.is_pressed(dir))
    .map(|dir| dir.unit() * speed)
    .sum()
}
