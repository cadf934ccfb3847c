//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes from the host, one tick per frame
//! - Seeded RNG only
//! - Stable iteration order (hazard insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod hazards;
pub mod input;
pub mod orbit;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, first_collision, player_hazard_collision};
pub use hazards::HazardField;
pub use input::{Direction, InputState, sample_intent};
pub use state::{Bounds, CircleView, FinalResult, GamePhase, GameState, Hazard, Player, Snapshot};
pub use tick::{TickOutcome, tick};
