//! Per-tick simulation systems, run in a fixed order by the engine:
//! player physics, enemy behavior, projectile advancement, collision.

pub mod collision;
pub mod enemy_ai;
pub mod player_physics;
pub mod snapshot;
pub mod weapons;
