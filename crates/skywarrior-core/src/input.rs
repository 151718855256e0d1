//! Per-tick input snapshot consumed by the simulation.
//!
//! The embedding application samples its input devices and hands the
//! result to `tick` — the core never touches device events itself.

use serde::{Deserialize, Serialize};

use crate::enums::ControlMode;

/// Held-key and pointer state sampled once per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Throttle-up key held.
    pub throttle_up: bool,
    /// Throttle-down key held.
    pub throttle_down: bool,
    /// Afterburner key held.
    pub boost: bool,
    /// Keyboard pitch input in [-1, 1]. Negative pitches up.
    pub pitch: f32,
    /// Keyboard yaw input in [-1, 1]. Positive yaws left.
    pub yaw: f32,
    /// Keyboard roll input in [-1, 1].
    pub roll: f32,
    /// Mouse movement since the last tick (pixels).
    pub mouse_dx: f32,
    /// Mouse movement since the last tick (pixels).
    pub mouse_dy: f32,
    /// Whether the pointer is captured. Mouse steering only applies
    /// when captured.
    pub pointer_locked: bool,
}

/// Player-tunable settings that affect control response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub mouse_sensitivity: f32,
    pub invert_y: bool,
    pub control_mode: ControlMode,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            mouse_sensitivity: 1.0,
            invert_y: false,
            control_mode: ControlMode::Arcade,
        }
    }
}
