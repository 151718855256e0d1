//! Fundamental kinematic and simulation types.
//!
//! Coordinates follow the renderer convention: +Y is up, the local
//! forward axis of every craft is +X, and the horizontal plane is X/Z.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// World-space position. Used directly as an ECS component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// World-space velocity (units/s). Used directly as an ECS component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Craft orientation. The local +X axis rotated by this quaternion is
/// the craft's forward vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub Quat);

impl Default for Orientation {
    fn default() -> Self {
        Self(Quat::IDENTITY)
    }
}

impl Orientation {
    /// The craft's forward vector in world space.
    pub fn forward(&self) -> Vec3 {
        self.0 * Vec3::X
    }

    /// Rotate about a craft-local axis by `angle` radians.
    pub fn rotate_local(&mut self, axis: Vec3, angle: f32) {
        self.0 = (self.0 * Quat::from_axis_angle(axis, angle)).normalize();
    }

    /// Orientation whose forward vector points along `dir` (need not be
    /// normalized). Falls back to identity for degenerate directions.
    pub fn facing(dir: Vec3) -> Self {
        match dir.try_normalize() {
            Some(d) => Self(Quat::from_rotation_arc(Vec3::X, d)),
            None => Self::default(),
        }
    }
}

/// Stable identifier for a registry entity. Target locks and missile
/// references hold these instead of raw references: a destroyed entity's
/// id simply fails lookup in the registry rather than dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        1.0 / TICK_RATE as f32
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
