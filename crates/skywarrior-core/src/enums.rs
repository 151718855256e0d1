//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    MissionComplete,
}

/// Enemy airframe category. Instances are stamped from the per-kind
/// behavior profile at spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile, evades threats.
    #[default]
    Scout,
    /// Balanced fighter, carries missiles.
    Assault,
    /// Slow, heavily armored, cannot evade, carries missiles.
    Heavy,
}

impl EnemyKind {
    /// Parse a kind identifier from mission data. Returns `None` for
    /// unrecognized names so the caller can fall back with a warning.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "scout" => Some(Self::Scout),
            "assault" => Some(Self::Assault),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }
}

/// Enemy behavior state. `Evade` covers both threat evasion and
/// proximity retreat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiState {
    #[default]
    Approach,
    Circle,
    Evade,
}

/// Player-selectable weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Cannon,
    Missiles,
}

/// Who fired a projectile. Routes collision checks and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

/// Steering control scheme. `Arcade` enables mouse steering while the
/// pointer is locked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlMode {
    #[default]
    Arcade,
    Simulation,
}
