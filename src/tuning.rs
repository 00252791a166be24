//! Data-driven game balance
//!
//! Balance values ship with defaults matching the classic feel and can be
//! overridden from a JSON file. A missing, corrupt, or invalid file falls
//! back to the defaults; tuning problems must never stop a run.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default tuning file name, looked up in the working directory
pub const DEFAULT_TUNING_PATH: &str = "tuning.json";

/// Per-run balance values
///
/// All motion values are per-tick increments at the fixed 60 Hz rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration applied every tick (negative = down)
    pub gravity: f32,
    /// Velocity set by an impulse, replacing whatever came before
    pub jump_strength: f32,
    /// Horizontal scroll speed of gates
    pub gate_speed: f32,
    /// Minimum ticks between gate spawns
    pub spawn_interval_ticks: u64,
    /// Vertical size of each gate's opening
    pub gate_gap: f32,
    /// Lowest possible opening anchor
    pub gap_y_min: f32,
    /// Highest possible opening anchor
    pub gap_y_max: f32,
    /// Particles per impulse burst
    pub burst_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -0.5,
            jump_strength: 8.0,
            gate_speed: 2.0,
            // 1.5 seconds at the 60 Hz tick rate
            spawn_interval_ticks: 90,
            gate_gap: 200.0,
            gap_y_min: 100.0,
            gap_y_max: 400.0,
            burst_count: 10,
        }
    }
}

impl Tuning {
    /// A tuning set the simulation can run on without panicking: the gap
    /// anchor range must be a valid uniform-draw range, and the basic
    /// signs must point the right way.
    pub fn is_valid(&self) -> bool {
        self.gap_y_min <= self.gap_y_max
            && self.gap_y_min.is_finite()
            && self.gap_y_max.is_finite()
            && self.gravity < 0.0
            && self.jump_strength > 0.0
            && self.gate_speed > 0.0
            && self.gate_gap > 0.0
    }

    /// Load tuning from a JSON file, falling back to defaults on any
    /// failure. Fields absent from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Self::default();
            }
            Err(err) => {
                log::warn!("failed to read tuning file {}: {err}", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Tuning>(&text) {
            Ok(tuning) if tuning.is_valid() => {
                log::info!("loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!(
                    "tuning file {} has out-of-range values, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(err) => {
                log::warn!("ignoring corrupt tuning file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write tuning to a JSON file, best-effort
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(path, json) {
                    log::warn!("tuning save skipped: {err}");
                }
            }
            Err(err) => log::warn!("tuning save skipped: {err}"),
        }
    }
}
