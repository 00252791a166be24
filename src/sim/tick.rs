//! Fixed-tick simulation step
//!
//! One call advances the world by exactly one tick. All increments are
//! per-tick constants; the loop outside is responsible for pacing calls
//! at the target rate.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::collision::circle_rect_hit;
use super::gates::Gate;
use super::particles;
use super::state::{GameEvent, GameMode, GameState};

/// Input commands for a single tick
///
/// Commands that do not apply to the current mode are silently ignored.
/// Quit is not represented here; it ends the outer loop.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Upward impulse (Playing only)
    pub impulse: bool,
    /// Begin a new run (GameOver only)
    pub restart: bool,
    /// Demo mode - synthesize impulse/restart by steering toward the
    /// next gate's opening
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    let mut input = input.clone();
    if input.autopilot {
        apply_autopilot(state, &mut input);
    }

    if state.mode == GameMode::GameOver && input.restart {
        state.reset_run();
    }

    if state.mode == GameMode::Playing && input.impulse {
        state.flyer.vel_y = state.tuning.jump_strength;
        let origin = Vec2::new(
            state.flyer.pos.x + FLYER_WIDTH / 2.0,
            state.flyer.pos.y,
        );
        let count = state.tuning.burst_count;
        particles::spawn_burst(&mut state.particles, &mut state.rng, origin, count);
        state.push_event(GameEvent::Impulse);
    }

    if state.mode == GameMode::Playing {
        // Integrate, then clamp at the ground. The ground is terminal.
        state.flyer.vel_y += state.tuning.gravity;
        state.flyer.pos.y += state.flyer.vel_y;
        if state.flyer.pos.y <= 0.0 {
            state.flyer.pos.y = 0.0;
            state.flyer.vel_y = 0.0;
            state.mode = GameMode::GameOver;
            state.push_event(GameEvent::GameOver);
        }
    }

    // Ground hit above freezes the gate pass along with everything else
    if state.mode == GameMode::Playing {
        // Spawn: one gate per elapsed-interval check, no catch-up
        if state.time_ticks - state.last_spawn_tick > state.tuning.spawn_interval_ticks {
            let (lo, hi) = (state.tuning.gap_y_min, state.tuning.gap_y_max);
            let gap_y = state.rng.random_range(lo..=hi);
            state.gates.push(Gate::new(SCREEN_WIDTH, gap_y));
            state.last_spawn_tick = state.time_ticks;
        }

        // Advance, score, and collide in one pass; compact afterwards so
        // removal never disturbs gates not yet visited
        let center = state.flyer.center();
        let radius = state.flyer.collision_radius();
        let gap = state.tuning.gate_gap;
        let speed = state.tuning.gate_speed;
        let mut cleared = 0u32;
        let mut hit = false;
        for gate in &mut state.gates {
            gate.advance(speed);
            if gate.try_score(FLYER_X) {
                cleared += 1;
            }
            if circle_rect_hit(center, radius, &gate.upper_rect(gap))
                || circle_rect_hit(center, radius, &gate.lower_rect())
            {
                hit = true;
            }
        }

        for _ in 0..cleared {
            state.score += 1;
            state.high_score = state.high_score.max(state.score);
            state.push_event(GameEvent::GateCleared);
        }

        if hit {
            state.mode = GameMode::GameOver;
            state.push_event(GameEvent::GameOver);
        }

        state.gates.retain(|g| !g.is_offscreen());
    }

    // Particles are not gated by mode; they animate to completion
    particles::step(&mut state.particles);
}

/// Demo-mode input synthesis: restart after a lost run, flap whenever the
/// flyer is falling below the next opening's center.
fn apply_autopilot(state: &GameState, input: &mut TickInput) {
    match state.mode {
        GameMode::GameOver => input.restart = true,
        GameMode::Playing => {
            let target_y = state
                .gates
                .iter()
                .filter(|g| g.x + GATE_WIDTH >= FLYER_X)
                .min_by(|a, b| {
                    a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
                })
                .map(|g| g.gap_y + state.tuning.gate_gap / 2.0)
                .unwrap_or(FLYER_START_Y);

            if state.flyer.center().y < target_y && state.flyer.vel_y <= 0.0 {
                input.impulse = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    /// Tuning with gravity switched off, so the flyer holds altitude and
    /// tests can focus on gates without keeping it airborne
    fn hover_tuning() -> Tuning {
        Tuning {
            gravity: 0.0,
            spawn_interval_ticks: 1_000_000,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_gravity_integration() {
        let mut state = GameState::new(1);
        let g = state.tuning.gravity;
        let y0 = state.flyer.pos.y;

        tick(&mut state, &TickInput::default());

        assert!((state.flyer.vel_y - g).abs() < 1e-6);
        assert!((state.flyer.pos.y - (y0 + g)).abs() < 1e-6);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_impulse_overwrites_velocity_and_bursts() {
        let mut state = GameState::new(1);
        state.flyer.vel_y = -20.0;

        let input = TickInput {
            impulse: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        // Impulse replaces the velocity, then gravity applies on top
        let expected = state.tuning.jump_strength + state.tuning.gravity;
        assert!((state.flyer.vel_y - expected).abs() < 1e-6);
        assert_eq!(state.particles.len(), state.tuning.burst_count);
        assert!(state.events().contains(&GameEvent::Impulse));
    }

    #[test]
    fn test_ground_hit_is_terminal() {
        let mut state = GameState::new(1);
        state.flyer.pos.y = 0.2;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.flyer.pos.y, 0.0);
        assert_eq!(state.flyer.vel_y, 0.0);
        assert_eq!(state.mode, GameMode::GameOver);
        assert!(state.events().contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_impulse_ignored_in_game_over() {
        let mut state = GameState::new(1);
        state.mode = GameMode::GameOver;
        state.flyer.pos.y = 0.0;
        state.flyer.vel_y = 0.0;

        let input = TickInput {
            impulse: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.flyer.vel_y, 0.0);
        assert!(state.particles.is_empty());
        assert!(state.events().is_empty());
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::with_tuning(1, hover_tuning());
        state.score = 3;

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.score, 3);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_restart_from_game_over_runs_same_tick() {
        let mut state = GameState::new(1);
        state.mode = GameMode::GameOver;
        state.score = 7;
        state.high_score = 12;
        state.gates.push(Gate::new(300.0, 250.0));

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        // Reset happened, then physics resumed within the same tick
        assert_eq!(state.mode, GameMode::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 12);
        assert!(state.gates.is_empty());
        assert!((state.flyer.vel_y - state.tuning.gravity).abs() < 1e-6);
    }

    #[test]
    fn test_gate_scores_exactly_once() {
        let mut state = GameState::with_tuning(1, hover_tuning());
        // Right edge one pixel short of the flyer, opening centered on it
        state.gates.push(Gate::new(FLYER_X - GATE_WIDTH + 1.0, 200.0));

        let mut cleared_events = 0;
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
            cleared_events += state
                .events()
                .iter()
                .filter(|e| **e == GameEvent::GateCleared)
                .count();
        }

        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, 1);
        assert_eq!(cleared_events, 1);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_gate_collision_ends_run_and_freezes_gates() {
        let mut state = GameState::with_tuning(1, hover_tuning());
        // Opening far above the flyer, so the lower obstacle covers it
        state.gates.push(Gate::new(FLYER_X, 550.0));

        tick(&mut state, &TickInput::default());
        assert_eq!(state.mode, GameMode::GameOver);
        assert!(state.events().contains(&GameEvent::GameOver));

        // Gates and score freeze; particles keep animating
        let frozen_x = state.gates[0].x;
        state.particles.push(crate::sim::Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 1.0),
            size: 2.0,
            color: [1.0, 0.9, 0.2, 1.0],
            life: 10,
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.gates[0].x, frozen_x);
        assert_eq!(state.particles[0].pos, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_spawn_once_per_elapsed_interval() {
        let mut state = GameState::with_tuning(
            1,
            Tuning {
                gravity: 0.0,
                spawn_interval_ticks: 5,
                ..Tuning::default()
            },
        );

        for expected_time in 1..=5u64 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.time_ticks, expected_time);
            assert!(state.gates.is_empty());
        }
        // Tick 6: 6 - 0 > 5, exactly one gate appears at the right edge
        tick(&mut state, &TickInput::default());
        assert_eq!(state.gates.len(), 1);
        assert_eq!(state.last_spawn_tick, 6);

        // Next spawn only after another full interval
        for _ in 0..5 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.gates.len(), 1);
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.gates.len(), 2);
    }

    #[test]
    fn test_spawned_gap_stays_in_range() {
        let mut state = GameState::with_tuning(
            9,
            Tuning {
                gravity: 0.0,
                spawn_interval_ticks: 1,
                ..Tuning::default()
            },
        );
        for _ in 0..200 {
            tick(&mut state, &TickInput::default());
        }
        assert!(!state.gates.is_empty());
        let (lo, hi) = (state.tuning.gap_y_min, state.tuning.gap_y_max);
        for gate in &state.gates {
            assert!((lo..=hi).contains(&gate.gap_y));
        }
    }

    #[test]
    fn test_retirement_is_exact() {
        let mut state = GameState::with_tuning(1, hover_tuning());
        // After one advance of gate_speed, the first sits exactly one
        // past the retirement line, the second exactly one before it
        let speed = state.tuning.gate_speed;
        state
            .gates
            .push(Gate::new(-GATE_WIDTH - 1.0 + speed, 550.0));
        state
            .gates
            .push(Gate::new(-GATE_WIDTH + 1.0 + speed, 550.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.gates.len(), 1);
        assert_eq!(state.gates[0].x, -GATE_WIDTH + 1.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed fed the same inputs stay identical
        let mut state1 = GameState::new(99_999);
        let mut state2 = GameState::new(99_999);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.gates.len(), state2.gates.len());
        assert_eq!(state1.flyer.pos, state2.flyer.pos);
    }

    #[test]
    fn test_autopilot_survives_without_gates() {
        let mut state = GameState::with_tuning(
            1,
            Tuning {
                spawn_interval_ticks: 1_000_000,
                ..Tuning::default()
            },
        );

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..600 {
            tick(&mut state, &input);
        }

        assert_eq!(state.mode, GameMode::Playing);
        assert!(state.flyer.pos.y > 0.0);
        assert!(state.flyer.pos.y < SCREEN_HEIGHT);
    }
}
