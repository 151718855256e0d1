//! Events emitted by the simulation for the external VFX/SFX collaborators.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// One-shot combat events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An explosion effect should play at `position`.
    Explosion { position: Vec3, magnitude: f32 },
    /// A cannon round was fired.
    CannonFired { by_player: bool },
    /// A homing missile was launched.
    MissileLaunched { by_player: bool },
    /// An enemy craft was destroyed.
    EnemyDestroyed { id: EntityId, position: Vec3 },
    /// The player took damage.
    PlayerDamaged { remaining_health: f32 },
}
