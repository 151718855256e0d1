//! Projectile spawning and advancement.
//!
//! Bullets are ballistic: straight-line flight, fixed lifetime, removed
//! below the kill floor. Missiles steer toward their target during the
//! homing window, then fly straight on their last heading.

use glam::Vec3;
use hecs::{Entity, World};

use skywarrior_core::components::{HomingMissile, Projectile};
use skywarrior_core::constants::*;
use skywarrior_core::enums::ProjectileOwner;
use skywarrior_core::types::{Orientation, Position, Velocity};

use crate::id_of;

/// Spawn a cannon round ahead of the firer along `direction`.
pub fn spawn_bullet(
    world: &mut World,
    origin: Vec3,
    direction: Vec3,
    owner: ProjectileOwner,
) -> Entity {
    let direction = direction.normalize_or_zero();
    world.spawn((
        Position(origin + direction * PLAYER_HULL_RADIUS),
        Velocity(direction * BULLET_SPEED),
        Projectile {
            life_ticks: BULLET_LIFE_TICKS,
            damage: BULLET_DAMAGE,
            owner,
        },
    ))
}

/// Launch a homing missile from `firer` at `target`. The spawn point is
/// offset ahead of the firer by its hull radius, and the missile starts
/// on the firer's heading.
#[allow(clippy::too_many_arguments)]
pub fn spawn_missile(
    world: &mut World,
    firer: Entity,
    firer_position: Vec3,
    firer_orientation: Orientation,
    firer_radius: f32,
    target: Entity,
    owner: ProjectileOwner,
    launch_tick: u64,
) -> Entity {
    let forward = firer_orientation.forward();
    world.spawn((
        Position(firer_position + forward * firer_radius),
        firer_orientation,
        HomingMissile {
            target: Some(id_of(target)),
            fired_by: id_of(firer),
            owner,
            speed: MISSILE_SPEED,
            turn_rate: MISSILE_TURN_RATE,
            launch_tick,
            life_ticks: MISSILE_LIFE_TICKS,
            damage: MISSILE_DAMAGE,
        },
    ))
}

/// Advance every projectile one tick and despawn the expired ones.
pub fn run(world: &mut World, tick: u64, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    advance_bullets(world, dt, despawn_buffer);
    advance_missiles(world, tick, dt, despawn_buffer);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn advance_bullets(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (position, velocity, projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
    {
        position.0 += velocity.0 * dt;
        projectile.life_ticks = projectile.life_ticks.saturating_sub(1);
        if projectile.life_ticks == 0 || position.0.y < BULLET_FLOOR {
            despawn_buffer.push(entity);
        }
    }
}

fn advance_missiles(world: &mut World, tick: u64, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    // Resolve target positions up front so guidance can run inside a
    // single mutable pass over the missiles.
    let mut guidance: Vec<(Entity, Option<Vec3>)> = Vec::new();
    for (entity, missile) in world.query::<&HomingMissile>().iter() {
        let target_position = missile
            .target
            .and_then(crate::resolve)
            .and_then(|t| world.get::<&Position>(t).ok().map(|p| p.0));
        guidance.push((entity, target_position));
    }

    for (entity, target_position) in guidance {
        let Ok((position, orientation, missile)) =
            world.query_one_mut::<(&mut Position, &mut Orientation, &mut HomingMissile)>(entity)
        else {
            continue;
        };

        let age_secs = tick.saturating_sub(missile.launch_tick) as f32 * dt;
        if age_secs < MISSILE_HOMING_SECS {
            match target_position {
                Some(target) => {
                    let desired = Orientation::facing(target - position.0);
                    let t = (missile.turn_rate * dt).min(1.0);
                    orientation.0 = orientation.0.slerp(desired.0, t).normalize();
                }
                // Target gone: drop the lock and coast straight.
                None => missile.target = None,
            }
        }

        position.0 += orientation.forward() * missile.speed * dt;
        missile.life_ticks = missile.life_ticks.saturating_sub(1);
        if missile.life_ticks == 0 {
            despawn_buffer.push(entity);
        }
    }
}
