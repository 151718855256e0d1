//! Deterministic fixed-timestep simulation engine for SKY WARRIOR.
//!
//! Owns the entity registry and drives the per-tick system pipeline:
//! player flight, enemy behavior, projectile advancement, collision
//! resolution, and mission bookkeeping. Each tick consumes one input
//! snapshot and produces one complete [`GameStateSnapshot`].
//!
//! [`GameStateSnapshot`]: skywarrior_core::state::GameStateSnapshot

pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};

use skywarrior_core::types::EntityId;

/// Stable id for a registry entity. Survives as a weak reference: a
/// despawned entity's id fails [`resolve`] instead of dangling.
pub(crate) fn id_of(entity: hecs::Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

/// Recover the registry handle behind an [`EntityId`]. Returns `None`
/// for ids that were never valid bit patterns; liveness is still the
/// registry's call via `World::contains`.
pub(crate) fn resolve(id: EntityId) -> Option<hecs::Entity> {
    hecs::Entity::from_bits(id.0)
}

#[cfg(test)]
mod tests;
