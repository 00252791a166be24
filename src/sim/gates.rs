//! Gate entities - the paired obstacles the flyer threads through
//!
//! A gate is one obstacle pair at horizontal position `x` with a vertical
//! opening anchored at `gap_y`. Spawning cadence and the advance/score/
//! retire passes are driven from [`tick`](super::tick::tick); this module
//! owns the per-gate geometry and lifecycle predicates.

use crate::consts::*;

use super::collision::Rect;

/// One obstacle pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gate {
    /// Left edge; decreases every tick
    pub x: f32,
    /// Bottom of the vertical opening
    pub gap_y: f32,
    /// Set once the flyer has passed; guards against double scoring
    pub scored: bool,
}

impl Gate {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self {
            x,
            gap_y,
            scored: false,
        }
    }

    /// Scroll left by the per-tick speed
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// The obstacle above the opening: starts `gap` above the anchor and
    /// extends upward past the top of the playfield
    pub fn upper_rect(&self, gap: f32) -> Rect {
        Rect::new(self.x, self.gap_y + gap, GATE_WIDTH, GATE_BODY_HEIGHT)
    }

    /// The obstacle below the opening: ends at the anchor and extends
    /// downward past the ground
    pub fn lower_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_y - GATE_BODY_HEIGHT,
            GATE_WIDTH,
            GATE_BODY_HEIGHT,
        )
    }

    /// Flag the gate as cleared once its right edge has passed the flyer.
    /// Returns true at most once over the gate's lifetime.
    pub fn try_score(&mut self, flyer_x: f32) -> bool {
        if !self.scored && self.x + GATE_WIDTH < flyer_x {
            self.scored = true;
            true
        } else {
            false
        }
    }

    /// Fully off the left edge; retired by the compaction pass
    pub fn is_offscreen(&self) -> bool {
        self.x < -GATE_WIDTH
    }
}
