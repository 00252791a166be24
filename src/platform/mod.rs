//! Platform collaborators
//!
//! The simulation core is headless; frontends supply the pieces that
//! touch the outside world:
//! - Frame pacing (the tick source)
//! - Rendering
//! - Audio cues
//!
//! Null implementations ship for headless runs and tests. A frontend
//! that fails to load its assets should keep implementing these traits
//! with whatever it has left (placeholder visuals, silence) rather than
//! aborting the simulation.

use std::time::{Duration, Instant};

use crate::sim::{GameEvent, GameState};

/// Receives the full simulation state once per tick and produces pixels
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Renderer that draws nothing
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}

/// Fire-and-forget sound trigger points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Successful jump
    Impulse,
    /// Ground hit or gate collision
    Failure,
}

/// Plays audio cues; no acknowledgment expected
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Sink that stays silent
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Map a simulation event to the cue it triggers, if any
pub fn cue_for(event: GameEvent) -> Option<AudioCue> {
    match event {
        GameEvent::Impulse => Some(AudioCue::Impulse),
        GameEvent::GameOver => Some(AudioCue::Failure),
        GameEvent::GateCleared => None,
    }
}

/// Caps the main loop to a target tick rate by sleeping out the
/// remainder of each frame. The simulation itself never compensates for
/// elapsed wall-clock time; this pacing is the only timing in the loop.
pub struct FrameLimiter {
    frame: Duration,
    last: Instant,
}

impl FrameLimiter {
    pub fn new(target_hz: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(target_hz.max(1))),
            last: Instant::now(),
        }
    }

    /// Sleep until the current frame's time slot is used up
    pub fn wait(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.last = Instant::now();
    }
}
