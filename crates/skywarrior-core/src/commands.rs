//! Player commands sent from the frontend to the simulation.
//!
//! Discrete actions (weapon fire, targeting, phase changes) arrive as
//! commands and are processed at the next tick boundary. Continuous
//! control lives in `InputSnapshot` instead.

use serde::{Deserialize, Serialize};

use crate::enums::WeaponKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Mission control ---
    /// Start (or restart) the mission with the given id.
    StartMission { mission_id: u32 },
    /// Pause the simulation. No partial ticks: the world freezes as-is.
    Pause,
    /// Resume from pause.
    Resume,
    /// Restart the current mission from scratch.
    RestartMission,
    /// Abandon the mission and return to the menu.
    ReturnToMenu,

    // --- Weapons ---
    /// Fire the cannon (if selected and ammunition remains).
    FirePrimary,
    /// Launch a homing missile at the locked target.
    FireMissile,
    /// Select a weapon.
    SelectWeapon { weapon: WeaponKind },

    // --- Targeting ---
    /// Cycle the target lock to the next enemy in registry order.
    CycleTarget,
    /// Lock the nearest enemy if no target is held.
    LockTarget,
}
