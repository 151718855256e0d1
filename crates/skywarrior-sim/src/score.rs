//! Per-mission scoring state.

use serde::{Deserialize, Serialize};

/// Running score and accuracy counters, reset at mission start.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreState {
    pub score: u32,
    /// Player cannon rounds and missiles fired.
    pub shots_fired: u32,
    /// Player projectiles that connected.
    pub hits: u32,
    pub enemies_destroyed: u32,
}

impl ScoreState {
    /// hits / shots_fired, or 0.0 when nothing was fired.
    pub fn accuracy(&self) -> f32 {
        if self.shots_fired == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots_fired as f32
        }
    }
}
