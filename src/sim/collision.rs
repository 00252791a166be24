//! Collision detection between the flyer and gate geometry
//!
//! The flyer is a circle, gates are axis-aligned rectangles. A hit is
//! terminal (first hit wins), so there is no contact point or normal to
//! compute - just the predicate.

use glam::Vec2;

/// An axis-aligned rectangle, y-up (`y` is the bottom edge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.h
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center into the rectangle to find the nearest point,
/// then compares squared distance against the squared radius. The
/// comparison is strict, so a circle exactly touching an edge is a miss.
pub fn circle_rect_hit(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let nearest = Vec2::new(
        center.x.clamp(rect.left(), rect.right()),
        center.y.clamp(rect.bottom(), rect.top()),
    );
    center.distance_squared(nearest) < radius * radius
}
