//! Game state snapshot — the complete visible state produced each tick.
//!
//! The renderer reads entity poses, the HUD reads aggregate stats, the
//! radar reads relative contacts, and the results screen reads the
//! mission outcome.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CombatEvent;
use crate::types::{EntityId, SimTime};

/// Complete game state emitted after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Active mission id, if any.
    pub mission_id: Option<u32>,
    /// Player pose and flight readouts. Absent in the menu.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub missiles: Vec<MissileView>,
    pub hud: HudView,
    pub radar: Vec<RadarContact>,
    /// Set once the mission ends, for the results screen.
    pub outcome: Option<MissionOutcome>,
    pub events: Vec<CombatEvent>,
}

/// Player pose for the renderer and chase camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub orientation: Quat,
    pub velocity: Vec3,
    pub afterburner_on: bool,
}

/// Enemy pose and visual state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub orientation: Quat,
    pub health: f32,
    pub ai_state: AiState,
    /// Whether this enemy is the player's locked target.
    pub locked: bool,
}

/// Bullet pose for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec3,
    pub from_player: bool,
}

/// Missile pose for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub position: Vec3,
    pub orientation: Quat,
    pub from_player: bool,
}

/// Aggregate stats for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub speed: f32,
    pub altitude: f32,
    pub throttle_pct: f32,
    pub g_force: f32,
    pub health_pct: f32,
    pub afterburner_pct: f32,
    pub cannon_rounds: u32,
    pub missile_rounds: u32,
    pub selected_weapon: WeaponKind,
    pub score: u32,
}

/// A radar blip: enemy position relative to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarContact {
    pub id: EntityId,
    /// Enemy position minus player position.
    pub relative: Vec3,
    /// Horizontal heading of the contact (radians).
    pub heading: f32,
    pub locked: bool,
}

/// Final mission result for the results screen and progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub mission_id: u32,
    pub success: bool,
    pub score: u32,
    pub hits: u32,
    pub shots_fired: u32,
    /// hits / shots_fired, or 0.0 when no shots were fired.
    pub accuracy: f32,
    pub elapsed_secs: f32,
}
