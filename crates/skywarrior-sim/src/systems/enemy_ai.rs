//! Enemy behavior system.
//!
//! Bridges the registry to the pure decision function: gathers the
//! tactical picture (player pose, live projectiles), evaluates each
//! enemy, then applies steering, integrates motion, and spawns any
//! ordnance the decisions called for.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;

use skywarrior_ai::decision::{decide, AiContext, AiDecision, BulletThreat, MissileThreat};
use skywarrior_core::components::{AiMemory, EnemyCraft, HomingMissile, PlayerShip, Projectile};
use skywarrior_core::constants::*;
use skywarrior_core::enums::ProjectileOwner;
use skywarrior_core::events::CombatEvent;
use skywarrior_core::types::{EntityId, Orientation, Position, Velocity};

use crate::systems::weapons;
use crate::id_of;

/// Advance every enemy one tick. No-op without a player entity.
pub fn run(
    world: &mut World,
    rng: &mut impl Rng,
    tick: u64,
    dt: f32,
    events: &mut Vec<CombatEvent>,
) {
    let Some((player_entity, player_position, player_velocity)) = find_player(world) else {
        return;
    };

    let bullets: Vec<BulletThreat> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, position, velocity))| BulletThreat {
            position: position.0,
            velocity: velocity.0,
            from_player: projectile.owner == ProjectileOwner::Player,
        })
        .collect();

    let missiles: Vec<(Vec3, Option<EntityId>)> = world
        .query::<(&HomingMissile, &Position)>()
        .iter()
        .map(|(_, (missile, position))| (position.0, missile.target))
        .collect();

    struct Update {
        entity: Entity,
        memory: AiMemory,
        position: Vec3,
        velocity: Vec3,
        orientation: Option<Orientation>,
        heading: Orientation,
        fire_bullet: Option<Vec3>,
        fire_missile: bool,
        hull_radius: f32,
    }

    let mut updates: Vec<Update> = Vec::new();
    for (entity, (craft, memory, position, orientation, velocity)) in world
        .query::<(&EnemyCraft, &AiMemory, &Position, &Orientation, &Velocity)>()
        .iter()
    {
        let my_id = id_of(entity);
        let missile_threats: Vec<MissileThreat> = missiles
            .iter()
            .map(|&(pos, target)| MissileThreat {
                position: pos,
                targets_me: target == Some(my_id),
            })
            .collect();

        let ctx = AiContext {
            craft,
            memory,
            position: position.0,
            forward: orientation.forward(),
            player_position,
            player_velocity,
            bullets: &bullets,
            missiles: &missile_threats,
            current_tick: tick,
            dt,
        };
        let AiDecision {
            memory,
            target_velocity,
            fire_bullet,
            fire_missile,
        } = decide(&ctx, rng);

        let mut velocity = velocity.0.lerp(target_velocity, ENEMY_STEER_SMOOTHING * dt);
        let mut position = position.0 + velocity * dt;
        if position.y < ENEMY_ALTITUDE_FLOOR {
            position.y = ENEMY_ALTITUDE_FLOOR;
            if velocity.y < 0.0 {
                velocity.y = 0.0;
            }
        }
        let new_orientation = (velocity.length() > ENEMY_FACING_THRESHOLD)
            .then(|| Orientation::facing(velocity));

        updates.push(Update {
            entity,
            memory,
            position,
            velocity,
            orientation: new_orientation,
            heading: new_orientation.unwrap_or(*orientation),
            fire_bullet,
            fire_missile,
            hull_radius: craft.hull_radius,
        });
    }

    for update in updates {
        if let Ok((memory, position, orientation, velocity)) = world
            .query_one_mut::<(&mut AiMemory, &mut Position, &mut Orientation, &mut Velocity)>(
                update.entity,
            )
        {
            *memory = update.memory;
            position.0 = update.position;
            velocity.0 = update.velocity;
            if let Some(facing) = update.orientation {
                *orientation = facing;
            }
        }

        if let Some(direction) = update.fire_bullet {
            weapons::spawn_bullet(world, update.position, direction, ProjectileOwner::Enemy);
            events.push(CombatEvent::CannonFired { by_player: false });
        }
        if update.fire_missile {
            weapons::spawn_missile(
                world,
                update.entity,
                update.position,
                update.heading,
                update.hull_radius,
                player_entity,
                ProjectileOwner::Enemy,
                tick,
            );
            events.push(CombatEvent::MissileLaunched { by_player: false });
        }
    }
}

fn find_player(world: &World) -> Option<(Entity, Vec3, Vec3)> {
    world
        .query::<(&PlayerShip, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(entity, (_, position, velocity))| (entity, position.0, velocity.0))
}
