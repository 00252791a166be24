//! Game state and core simulation types
//!
//! Everything a tick mutates lives here, owned by [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

use super::gates::Gate;
use super::particles::Particle;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a restart command
    GameOver,
}

/// Presentation phase, derived from the score every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPhase {
    Day,
    Night,
}

/// Day for scores 0-4, night for 5-9, day again for 10-14, and so on.
pub fn day_phase(score: u32) -> DayPhase {
    if (score / DAY_NIGHT_PERIOD) % 2 == 0 {
        DayPhase::Day
    } else {
        DayPhase::Night
    }
}

/// Things that happened during a tick that frontends react to
/// (audio cues, log lines). Drained once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The flyer took an upward impulse
    Impulse,
    /// A gate was passed; score already incremented
    GateCleared,
    /// Ground hit or gate collision ended the run
    GameOver,
}

/// The player's actor
#[derive(Debug, Clone, Copy)]
pub struct Flyer {
    /// Bottom-left corner of the sprite bounds; x stays at `FLYER_X`
    pub pos: Vec2,
    /// Vertical velocity, positive = up
    pub vel_y: f32,
}

impl Default for Flyer {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FLYER_X, FLYER_START_Y),
            vel_y: 0.0,
        }
    }
}

impl Flyer {
    /// Center of the sprite bounds, used as the collision circle center
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(FLYER_WIDTH / 2.0, FLYER_HEIGHT / 2.0)
    }

    /// Collision circle radius, slightly smaller than the sprite
    pub fn collision_radius(&self) -> f32 {
        FLYER_WIDTH.min(FLYER_HEIGHT) / 2.0 - COLLISION_MARGIN
    }

    /// Back to the start position with no velocity
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Complete game state, owned by the main loop and advanced by
/// [`tick`](super::tick::tick).
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter; advances in every mode
    pub time_ticks: u64,
    /// Current mode
    pub mode: GameMode,
    /// Gates cleared this run
    pub score: u32,
    /// Best score ever seen; mirrored from the persistent store
    pub high_score: u32,
    /// The player's actor
    pub flyer: Flyer,
    /// Live gates in spawn order (left-to-right)
    pub gates: Vec<Gate>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Balance values for this run
    pub tuning: Tuning,
    /// Tick of the most recent gate spawn
    pub last_spawn_tick: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with explicit balance values
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            time_ticks: 0,
            mode: GameMode::Playing,
            score: 0,
            high_score: 0,
            flyer: Flyer::default(),
            gates: Vec::new(),
            particles: Vec::new(),
            tuning,
            last_spawn_tick: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Day/night phase for the current score
    pub fn day_phase(&self) -> DayPhase {
        day_phase(self.score)
    }

    /// GameOver -> Playing. Resets the flyer and score and clears the
    /// gates; the high score, particles, and spawn timer are untouched.
    pub fn reset_run(&mut self) {
        self.flyer.reset();
        self.gates.clear();
        self.score = 0;
        self.mode = GameMode::Playing;
    }

    /// Events recorded by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the events recorded by the most recent tick
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
