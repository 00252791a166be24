//! Gate Glider - a side-scrolling gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gates, collisions, game state)
//! - `platform`: Frontend collaborator traits and frame pacing
//! - `highscores`: Best-effort persistent high score
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use highscores::HighScoreStore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per frame at this cap)
    pub const TICK_HZ: u32 = 60;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Flyer defaults - x never changes, only y integrates
    pub const FLYER_X: f32 = 100.0;
    pub const FLYER_START_Y: f32 = 300.0;
    pub const FLYER_WIDTH: f32 = 34.0;
    pub const FLYER_HEIGHT: f32 = 24.0;
    /// Shrinks the collision circle relative to the sprite bounds
    pub const COLLISION_MARGIN: f32 = 5.0;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 80.0;
    /// Body height of each gate half; taller than the reachable playfield
    /// on both sides of the gap
    pub const GATE_BODY_HEIGHT: f32 = 400.0;

    /// Gates cleared per day/night phase
    pub const DAY_NIGHT_PERIOD: u32 = 5;
}
