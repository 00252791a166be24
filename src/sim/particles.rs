//! Short-lived particle effects triggered by impulses
//!
//! Particles are purely cosmetic: they never interact with gates,
//! collisions, or scoring, and they keep animating through GameOver.

use glam::Vec2;
use rand::Rng;

/// A particle for visual effects
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    /// RGBA, each channel in [0, 1]
    pub color: [f32; 4],
    /// Remaining lifespan in ticks
    pub life: u32,
}

/// Spawn `count` particles at `origin` with randomized upward-biased
/// drift, warm coloring, and bounded lifespan. `count == 0` is a no-op.
pub fn spawn_burst(
    particles: &mut Vec<Particle>,
    rng: &mut impl Rng,
    origin: Vec2,
    count: usize,
) {
    for _ in 0..count {
        particles.push(Particle {
            pos: origin,
            vel: Vec2::new(
                rng.random_range(-1.5..=1.5),
                rng.random_range(1.0..=3.0),
            ),
            size: rng.random_range(2.0..=5.0),
            color: [
                rng.random_range(0.8..=1.0),
                rng.random_range(0.8..=1.0),
                rng.random_range(0.1..=0.3),
                1.0,
            ],
            life: rng.random_range(20..=40),
        });
    }
}

/// One full system pass: integrate every particle by its velocity,
/// decrement lifespans, drop the expired. Order-independent.
pub fn step(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.life = particle.life.saturating_sub(1);
    }
    particles.retain(|p| p.life > 0);
}
