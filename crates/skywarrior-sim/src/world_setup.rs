//! Entity spawn factories for mission start.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use tracing::warn;

use skywarrior_ai::profiles;
use skywarrior_campaign::missions::MissionDef;
use skywarrior_core::components::{
    AiMemory, FlightState, Health, PlayerShip, WeaponStation,
};
use skywarrior_core::constants::*;
use skywarrior_core::enums::EnemyKind;
use skywarrior_core::types::{Orientation, Position, Velocity};

/// Spawn the player's jet at the mission start pose.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        PlayerShip,
        Position(Vec3::new(0.0, 100.0, 0.0)),
        Orientation::default(),
        Velocity(Vec3::ZERO),
        FlightState::default(),
        Health::full(),
        WeaponStation::default(),
    ))
}

/// Spawn the mission's opening wave: enemies placed on a circle around
/// the origin at evenly spaced bearings, with seeded radius, altitude,
/// and kind variation.
pub fn spawn_enemy_wave(world: &mut World, rng: &mut impl Rng, mission: &MissionDef) {
    let count = mission.enemies.max(1);
    for i in 0..mission.enemies {
        let angle = i as f32 / count as f32 * TAU;
        let radius = rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);
        let altitude = rng.gen_range(SPAWN_ALTITUDE_MIN..SPAWN_ALTITUDE_MAX);
        let position = Vec3::new(angle.cos() * radius, altitude, angle.sin() * radius);

        let name = mission.enemy_pool[rng.gen_range(0..mission.enemy_pool.len())];
        let kind = EnemyKind::parse(name).unwrap_or_else(|| {
            warn!(name, "unknown enemy kind in mission data, using default");
            EnemyKind::default()
        });

        spawn_enemy(world, rng, kind, position);
    }
}

/// Spawn a single enemy craft with stats stamped from its kind profile.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut impl Rng,
    kind: EnemyKind,
    position: Vec3,
) -> Entity {
    let (craft, max_health) = profiles::stamp(kind, rng);
    let velocity = Vec3::new(
        (rng.gen::<f32>() - 0.5) * 150.0,
        (rng.gen::<f32>() - 0.5) * 30.0,
        (rng.gen::<f32>() - 0.5) * 150.0,
    );
    let memory = AiMemory {
        circle_dir: if rng.gen::<bool>() { 1.0 } else { -1.0 },
        ..AiMemory::default()
    };
    world.spawn((
        craft,
        memory,
        Position(position),
        Orientation::facing(velocity),
        Velocity(velocity),
        Health::new(max_health),
    ))
}
