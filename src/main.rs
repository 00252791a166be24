//! Gate Glider entry point
//!
//! Runs a headless demo at the fixed tick rate: the autopilot plays,
//! simulation events map to audio cues, and the high score persists
//! across runs. Graphical frontends replace the null collaborators.

use std::time::{SystemTime, UNIX_EPOCH};

use gate_glider::consts::TICK_HZ;
use gate_glider::highscores::{DEFAULT_STORE_PATH, HighScoreStore};
use gate_glider::platform::{
    AudioSink, FrameLimiter, NullAudio, NullRenderer, Renderer, cue_for,
};
use gate_glider::sim::{GameEvent, GameState, TickInput, tick};
use gate_glider::tuning::{DEFAULT_TUNING_PATH, Tuning};

/// Demo length: half a minute at the fixed tick rate
const DEMO_TICKS: u64 = 30 * TICK_HZ as u64;

fn main() {
    env_logger::init();

    let tuning = Tuning::load(DEFAULT_TUNING_PATH);
    let mut store = HighScoreStore::open(DEFAULT_STORE_PATH);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut state = GameState::with_tuning(seed, tuning);
    state.high_score = store.best();
    log::info!(
        "starting demo run: seed {seed}, stored high score {}",
        store.best()
    );

    let mut limiter = FrameLimiter::new(TICK_HZ);
    let mut renderer = NullRenderer;
    let mut audio = NullAudio;
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    for _ in 0..DEMO_TICKS {
        tick(&mut state, &input);

        for event in state.take_events() {
            match event {
                GameEvent::GateCleared => {
                    log::debug!("gate cleared, score {}", state.score);
                }
                GameEvent::GameOver => log::info!("run over at score {}", state.score),
                GameEvent::Impulse => {}
            }
            if let Some(cue) = cue_for(event) {
                audio.play(cue);
            }
        }

        store.record(state.high_score);
        renderer.draw(&state);
        limiter.wait();
    }

    log::info!(
        "demo finished: best this session {}, stored high score {}",
        state.high_score,
        store.best()
    );
}
