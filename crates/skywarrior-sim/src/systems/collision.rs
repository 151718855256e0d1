//! Collision resolution, damage, and scoring.
//!
//! Sphere tests between projectiles and craft. Bullets check the side
//! they were not fired from; missiles check everything except their own
//! firer during the post-launch grace window. Destroyed enemies are
//! despawned in the same tick, and every reference to them (the
//! player's target lock, missile guidance) is cleared before the tick's
//! snapshot is built.

use glam::Vec3;
use hecs::{Entity, World};

use skywarrior_core::components::{
    EnemyCraft, Health, HomingMissile, PlayerShip, Projectile, WeaponStation,
};
use skywarrior_core::constants::*;
use skywarrior_core::enums::ProjectileOwner;
use skywarrior_core::events::CombatEvent;
use skywarrior_core::types::Position;

use crate::id_of;
use crate::score::ScoreState;

/// Resolve all projectile collisions for this tick.
pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
    despawn_buffer: &mut Vec<Entity>,
    tick: u64,
    dt: f32,
) {
    let player: Option<(Entity, Vec3)> = world
        .query::<(&PlayerShip, &Position)>()
        .iter()
        .next()
        .map(|(entity, (_, position))| (entity, position.0));

    let enemies: Vec<(Entity, Vec3)> = world
        .query::<(&EnemyCraft, &Position)>()
        .iter()
        .map(|(entity, (_, position))| (entity, position.0))
        .collect();

    let bullets: Vec<(Entity, Vec3, Projectile)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (projectile, position))| (entity, position.0, *projectile))
        .collect();

    let missiles: Vec<(Entity, Vec3, HomingMissile)> = world
        .query::<(&HomingMissile, &Position)>()
        .iter()
        .map(|(entity, (missile, position))| (entity, position.0, missile.clone()))
        .collect();

    let mut destroyed: Vec<(Entity, Vec3)> = Vec::new();

    for (bullet, position, projectile) in bullets {
        match projectile.owner {
            ProjectileOwner::Player => {
                let hit = enemies.iter().find(|(enemy, enemy_position)| {
                    !is_destroyed(&destroyed, *enemy)
                        && enemy_position.distance(position) < ENEMY_HIT_RADIUS
                });
                if let Some(&(enemy, enemy_position)) = hit {
                    score.hits += 1;
                    score.score += SCORE_BULLET_HIT;
                    events.push(CombatEvent::Explosion {
                        position,
                        magnitude: 0.5,
                    });
                    if damage_entity(world, enemy, projectile.damage) {
                        record_kill(
                            score,
                            events,
                            &mut destroyed,
                            enemy,
                            enemy_position,
                            Some(SCORE_BULLET_KILL),
                        );
                    }
                    despawn_buffer.push(bullet);
                }
            }
            ProjectileOwner::Enemy => {
                if let Some((player_entity, player_position)) = player {
                    if player_position.distance(position) < PLAYER_HIT_RADIUS {
                        damage_player(world, player_entity, projectile.damage, position, events);
                        despawn_buffer.push(bullet);
                    }
                }
            }
        }
    }

    for (entity, position, missile) in missiles {
        let age_secs = tick.saturating_sub(missile.launch_tick) as f32 * dt;
        let in_grace = age_secs < MISSILE_GRACE_SECS;

        let enemy_hit = enemies.iter().find(|(enemy, enemy_position)| {
            !is_destroyed(&destroyed, *enemy)
                && !(in_grace && id_of(*enemy) == missile.fired_by)
                && enemy_position.distance(position) < ENEMY_HIT_RADIUS
        });
        if let Some(&(enemy, enemy_position)) = enemy_hit {
            if missile.owner == ProjectileOwner::Player {
                score.hits += 1;
                score.score += SCORE_MISSILE_HIT;
            }
            events.push(CombatEvent::Explosion {
                position,
                magnitude: 1.0,
            });
            if damage_entity(world, enemy, missile.damage) {
                let bonus =
                    (missile.owner == ProjectileOwner::Player).then_some(SCORE_MISSILE_KILL);
                record_kill(score, events, &mut destroyed, enemy, enemy_position, bonus);
            }
            despawn_buffer.push(entity);
            continue;
        }

        if let Some((player_entity, player_position)) = player {
            let protected = in_grace && id_of(player_entity) == missile.fired_by;
            if !protected && player_position.distance(position) < PLAYER_HIT_RADIUS {
                damage_player(world, player_entity, missile.damage, position, events);
                despawn_buffer.push(entity);
            }
        }
    }

    // Destroyed enemies leave the registry now, and nothing may keep
    // pointing at them: drop the player's lock and any missile guidance
    // before this tick's snapshot is built.
    for (enemy, _) in &destroyed {
        let id = id_of(*enemy);
        for (_, station) in world.query_mut::<&mut WeaponStation>() {
            if station.target == Some(id) {
                station.target = None;
            }
        }
        for (_, missile) in world.query_mut::<&mut HomingMissile>() {
            if missile.target == Some(id) {
                missile.target = None;
            }
        }
        let _ = world.despawn(*enemy);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

fn is_destroyed(destroyed: &[(Entity, Vec3)], entity: Entity) -> bool {
    destroyed.iter().any(|(e, _)| *e == entity)
}

/// Apply damage to an entity's health. Returns true on destruction.
fn damage_entity(world: &mut World, entity: Entity, damage: f32) -> bool {
    world
        .get::<&mut Health>(entity)
        .map(|mut health| health.apply_damage(damage))
        .unwrap_or(false)
}

fn damage_player(
    world: &mut World,
    player: Entity,
    damage: f32,
    position: Vec3,
    events: &mut Vec<CombatEvent>,
) {
    let remaining = world
        .get::<&mut Health>(player)
        .map(|mut health| {
            health.apply_damage(damage);
            health.current
        })
        .unwrap_or(0.0);
    events.push(CombatEvent::Explosion {
        position,
        magnitude: 1.0,
    });
    events.push(CombatEvent::PlayerDamaged {
        remaining_health: remaining,
    });
}

fn record_kill(
    score: &mut ScoreState,
    events: &mut Vec<CombatEvent>,
    destroyed: &mut Vec<(Entity, Vec3)>,
    enemy: Entity,
    position: Vec3,
    kill_bonus: Option<u32>,
) {
    if let Some(bonus) = kill_bonus {
        score.score += bonus;
    }
    score.enemies_destroyed += 1;
    events.push(CombatEvent::Explosion {
        position,
        magnitude: 2.0,
    });
    events.push(CombatEvent::EnemyDestroyed {
        id: id_of(enemy),
        position,
    });
    destroyed.push((enemy, position));
}
