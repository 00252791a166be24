//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (constant per-tick increments, no wall-clock deltas)
//! - Seeded RNG only
//! - Stable iteration order (spawn order = left-to-right gate order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod gates;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_hit};
pub use gates::Gate;
pub use particles::Particle;
pub use state::{DayPhase, Flyer, GameEvent, GameMode, GameState, day_phase};
pub use tick::{TickInput, tick};
