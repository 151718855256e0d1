//! ECS components for simulation entities.
//!
//! Components are plain data structs with no behavior beyond small
//! accessors. Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::PLAYER_MAX_HEALTH;
use crate::enums::*;
use crate::types::EntityId;

/// Marks the player's jet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks an entity as an enemy craft and carries its stamped stats.
/// Stats are derived from the kind's behavior profile at spawn, with
/// seeded per-instance variation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCraft {
    pub kind: EnemyKind,
    /// Top speed (units/s).
    pub speed: f32,
    /// Firing eagerness in [0, 1].
    pub aggressiveness: f32,
    /// Preferred engagement range (units).
    pub attack_distance: f32,
    /// Range below which the craft retreats (units).
    pub retreat_distance: f32,
    /// Whether this craft reacts to incoming fire.
    pub can_evade: bool,
    /// Whether this craft carries missiles.
    pub can_fire_missiles: bool,
    /// Per-second missile fire probability while in envelope.
    pub missile_fire_chance: f32,
    /// Hull radius, used as the muzzle offset for its projectiles.
    pub hull_radius: f32,
}

/// Per-enemy AI working memory, mutated by the behavior system each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMemory {
    pub state: AiState,
    /// Remaining evasion time (seconds). Evasion steering persists while > 0.
    pub evasion_timer: f32,
    /// Steering vector held for the duration of an evasion.
    pub evasion_steer: Vec3,
    /// Circling direction, +1 or -1.
    pub circle_dir: f32,
    /// Tick of the last missile launch, for the cooldown gate.
    pub last_missile_tick: Option<u64>,
}

impl Default for AiMemory {
    fn default() -> Self {
        Self {
            state: AiState::Approach,
            evasion_timer: 0.0,
            evasion_steer: Vec3::ZERO,
            circle_dir: 1.0,
            last_missile_tick: None,
        }
    }
}

/// Player flight state integrated by the flight model each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    /// Throttle setting in [0, 1].
    pub throttle: f32,
    /// Afterburner fuel in [0, 100].
    pub afterburner_fuel: f32,
    /// Whether the afterburner was active this tick.
    pub afterburner_on: bool,
    /// Velocity at the end of the previous tick, for the G readout.
    pub previous_velocity: Vec3,
    /// Derived G-force.
    pub g_force: f32,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            throttle: 0.5,
            afterburner_fuel: crate::constants::MAX_AFTERBURNER_FUEL,
            afterburner_on: false,
            previous_velocity: Vec3::ZERO,
            g_force: 1.0,
        }
    }
}

/// Hit points. Never negative: damage clamps at zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
}

impl Health {
    pub fn full() -> Self {
        Self {
            current: PLAYER_MAX_HEALTH,
        }
    }

    pub fn new(current: f32) -> Self {
        Self { current }
    }

    /// Apply damage, clamping at zero. Returns true if this reduced
    /// health to zero (destruction).
    pub fn apply_damage(&mut self, damage: f32) -> bool {
        let was_alive = self.current > 0.0;
        self.current = (self.current - damage).max(0.0);
        was_alive && self.current <= 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Player weapon state: ammunition, selection, and the single target lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponStation {
    pub cannon_rounds: u32,
    pub missile_rounds: u32,
    pub selected: WeaponKind,
    /// At most one locked target. Cleared when the target is destroyed.
    pub target: Option<EntityId>,
}

impl Default for WeaponStation {
    fn default() -> Self {
        Self {
            cannon_rounds: crate::constants::CANNON_ROUNDS,
            missile_rounds: crate::constants::MISSILE_ROUNDS,
            selected: WeaponKind::Cannon,
            target: None,
        }
    }
}

/// An unguided bullet. Flies straight along its `Velocity`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Remaining lifetime in ticks. The bullet is removed when it reaches 0.
    pub life_ticks: u32,
    pub damage: f32,
    pub owner: ProjectileOwner,
}

/// A homing missile. Steers toward its target during the homing window,
/// then flies straight on its last orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomingMissile {
    /// Guidance target. Cleared if the target is destroyed.
    pub target: Option<EntityId>,
    /// Firing entity, excluded from collision during the grace window.
    pub fired_by: EntityId,
    pub owner: ProjectileOwner,
    /// Forward speed (units/s).
    pub speed: f32,
    /// Guidance slerp rate (per second).
    pub turn_rate: f32,
    /// Tick at which the missile was launched.
    pub launch_tick: u64,
    /// Remaining lifetime in ticks.
    pub life_ticks: u32,
    pub damage: f32,
}
