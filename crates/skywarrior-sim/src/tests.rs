use glam::Vec3;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skywarrior_campaign::missions;
use skywarrior_core::commands::PlayerCommand;
use skywarrior_core::components::{Health, PlayerShip, Projectile, WeaponStation};
use skywarrior_core::constants::*;
use skywarrior_core::enums::{EnemyKind, GamePhase, ProjectileOwner, WeaponKind};
use skywarrior_core::input::{InputSnapshot, PlayerSettings};
use skywarrior_core::types::{EntityId, Orientation, Position, Velocity};

use crate::engine::{SimConfig, SimulationEngine};
use crate::score::ScoreState;
use crate::systems::{collision, player_physics, weapons};
use crate::{id_of, world_setup};

fn engine_with_seed(seed: u64) -> SimulationEngine {
    SimulationEngine::new(SimConfig {
        seed,
        settings: PlayerSettings::default(),
    })
}

/// Queue a mission start and run the tick that applies it.
fn start_mission(engine: &mut SimulationEngine, mission_id: u32) {
    engine.queue_command(PlayerCommand::StartMission { mission_id });
    engine.tick(&InputSnapshot::default());
}

#[test]
fn same_seed_same_inputs_reproduce_the_run() {
    let input = InputSnapshot {
        throttle_up: true,
        pitch: -0.4,
        ..Default::default()
    };
    let mut snapshots = Vec::new();
    for _ in 0..2 {
        let mut engine = engine_with_seed(7);
        start_mission(&mut engine, 2);
        let mut last = None;
        for _ in 0..120 {
            last = Some(engine.tick(&input));
        }
        snapshots.push(serde_json::to_string(&last.unwrap()).unwrap());
    }
    assert_eq!(snapshots[0], snapshots[1]);
}

#[test]
fn different_seeds_diverge() {
    let mut a = engine_with_seed(1);
    let mut b = engine_with_seed(2);
    start_mission(&mut a, 2);
    start_mission(&mut b, 2);
    let sa = a.tick(&InputSnapshot::default());
    let sb = b.tick(&InputSnapshot::default());
    let positions =
        |s: &skywarrior_core::state::GameStateSnapshot| -> Vec<Vec3> { s.enemies.iter().map(|e| e.position).collect() };
    assert_ne!(positions(&sa), positions(&sb));
}

#[test]
fn wave_spawns_on_distinct_bearings() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mission = missions::get_mission(3).unwrap();
    world_setup::spawn_enemy_wave(&mut world, &mut rng, mission);

    let mut bearings = Vec::new();
    for (_, position) in world.query_mut::<&Position>() {
        let radius = Vec3::new(position.0.x, 0.0, position.0.z).length();
        assert!(radius >= SPAWN_RADIUS_MIN && radius < SPAWN_RADIUS_MAX);
        assert!(position.0.y >= SPAWN_ALTITUDE_MIN && position.0.y < SPAWN_ALTITUDE_MAX);
        bearings.push(position.0.z.atan2(position.0.x));
    }
    assert_eq!(bearings.len(), mission.enemies as usize);
    bearings.sort_by(f32::total_cmp);
    for pair in bearings.windows(2) {
        assert!((pair[1] - pair[0]).abs() > 0.01, "bearings must be distinct");
    }
}

#[test]
fn unknown_enemy_kind_falls_back_to_default() {
    let mission = missions::MissionDef {
        id: 99,
        name: "TEST",
        objective: "test",
        enemies: 2,
        time_limit_secs: 60,
        difficulty: missions::Difficulty::Easy,
        enemy_pool: &["battleship"],
    };
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    world_setup::spawn_enemy_wave(&mut world, &mut rng, &mission);

    let kinds: Vec<EnemyKind> = world
        .query_mut::<&skywarrior_core::components::EnemyCraft>()
        .into_iter()
        .map(|(_, craft)| craft.kind)
        .collect();
    assert_eq!(kinds, vec![EnemyKind::Scout, EnemyKind::Scout]);
}

#[test]
fn full_throttle_converges_below_max_speed() {
    let mut world = World::new();
    world_setup::spawn_player(&mut world);
    let input = InputSnapshot {
        throttle_up: true,
        ..Default::default()
    };
    let settings = PlayerSettings::default();
    for _ in 0..300 {
        player_physics::run(&mut world, &input, &settings, DT);
        for (_, velocity) in world.query_mut::<&Velocity>() {
            assert!(velocity.0.length() <= PLAYER_MAX_SPEED + 1e-3);
        }
    }
    for (_, velocity) in world.query_mut::<&Velocity>() {
        let speed = velocity.0.length();
        assert!(speed > 350.0, "speed {speed} should approach the maximum");
    }
}

#[test]
fn afterburner_raises_ceiling_and_drains_fuel() {
    let mut world = World::new();
    world_setup::spawn_player(&mut world);
    let input = InputSnapshot {
        throttle_up: true,
        boost: true,
        ..Default::default()
    };
    let settings = PlayerSettings::default();
    for _ in 0..240 {
        player_physics::run(&mut world, &input, &settings, DT);
    }
    for (_, (velocity, flight)) in
        world.query_mut::<(&Velocity, &skywarrior_core::components::FlightState)>()
    {
        assert!(velocity.0.length() > PLAYER_MAX_SPEED);
        assert!(velocity.0.length() <= PLAYER_BOOST_SPEED + 1e-3);
        assert!(flight.afterburner_fuel < MAX_AFTERBURNER_FUEL);
    }
}

#[test]
fn player_stays_inside_the_arena() {
    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world);
    {
        let mut position = world.get::<&mut Position>(player).unwrap();
        position.0 = Vec3::new(WORLD_EXTENT + 500.0, 5.0, -WORLD_EXTENT - 500.0);
        drop(position);
        let mut velocity = world.get::<&mut Velocity>(player).unwrap();
        velocity.0 = Vec3::new(0.0, -100.0, 0.0);
    }
    player_physics::run(
        &mut world,
        &InputSnapshot::default(),
        &PlayerSettings::default(),
        DT,
    );
    let position = world.get::<&Position>(player).unwrap();
    assert_eq!(position.0.x, WORLD_EXTENT);
    assert_eq!(position.0.z, -WORLD_EXTENT);
    assert_eq!(position.0.y, PLAYER_ALTITUDE_FLOOR);
    drop(position);
    let velocity = world.get::<&Velocity>(player).unwrap();
    assert_eq!(velocity.0.y, 0.0);
}

#[test]
fn mouse_steering_needs_pointer_lock() {
    let settings = PlayerSettings::default();
    let mut input = InputSnapshot {
        mouse_dx: 200.0,
        ..Default::default()
    };

    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world);
    let before = world.get::<&Orientation>(player).unwrap().0;
    player_physics::run(&mut world, &input, &settings, DT);
    assert_eq!(world.get::<&Orientation>(player).unwrap().0, before);

    input.pointer_locked = true;
    player_physics::run(&mut world, &input, &settings, DT);
    assert_ne!(world.get::<&Orientation>(player).unwrap().0, before);
}

#[test]
fn bullet_life_strictly_decreases_until_removal() {
    let mut world = World::new();
    let bullet = weapons::spawn_bullet(
        &mut world,
        Vec3::new(0.0, 100.0, 0.0),
        Vec3::X,
        ProjectileOwner::Player,
    );
    let mut buffer = Vec::new();
    let mut last_life = BULLET_LIFE_TICKS;
    for tick in 0..BULLET_LIFE_TICKS as u64 {
        weapons::run(&mut world, tick, DT, &mut buffer);
        if world.contains(bullet) {
            let life = world.get::<&Projectile>(bullet).unwrap().life_ticks;
            assert!(life < last_life);
            last_life = life;
        }
    }
    assert!(!world.contains(bullet), "bullet must expire at zero life");
}

#[test]
fn bullet_below_floor_is_removed_early() {
    let mut world = World::new();
    let bullet = weapons::spawn_bullet(
        &mut world,
        Vec3::ZERO,
        Vec3::NEG_Y,
        ProjectileOwner::Enemy,
    );
    let mut buffer = Vec::new();
    for tick in 0..10 {
        weapons::run(&mut world, tick, DT, &mut buffer);
    }
    // 1200 u/s straight down crosses the kill floor in a few ticks,
    // long before the lifetime runs out.
    assert!(!world.contains(bullet));
}

#[test]
fn missile_homes_during_window_then_coasts() {
    let mut world = World::new();
    let firer = world.spawn((Position(Vec3::ZERO),));
    let target = world.spawn((Position(Vec3::new(0.0, 0.0, 1000.0)),));
    let missile = weapons::spawn_missile(
        &mut world,
        firer,
        Vec3::ZERO,
        Orientation::default(),
        10.0,
        target,
        ProjectileOwner::Enemy,
        0,
    );

    let mut buffer = Vec::new();
    let aim_error = |world: &World| -> f32 {
        let orientation = *world.get::<&Orientation>(missile).unwrap();
        let position = world.get::<&Position>(missile).unwrap().0;
        let target_position = world.get::<&Position>(target).unwrap().0;
        orientation
            .forward()
            .angle_between(target_position - position)
    };

    let before = aim_error(&world);
    for tick in 0..30 {
        weapons::run(&mut world, tick, DT, &mut buffer);
    }
    assert!(aim_error(&world) < before, "guidance must turn toward target");

    // Past the homing window the heading is frozen even though the
    // target still exists.
    let past_window = (MISSILE_HOMING_SECS * TICK_RATE as f32) as u64 + 10;
    let heading = world.get::<&Orientation>(missile).unwrap().0;
    world.get::<&mut Position>(target).unwrap().0 = Vec3::new(0.0, 500.0, -1000.0);
    weapons::run(&mut world, past_window, DT, &mut buffer);
    assert_eq!(world.get::<&Orientation>(missile).unwrap().0, heading);
}

/// Build a world with a player, one scout, and a player bullet parked
/// on the scout.
fn collision_fixture() -> (World, hecs::Entity, hecs::Entity) {
    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world);
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let enemy_position = Vec3::new(400.0, 120.0, 0.0);
    let enemy = world_setup::spawn_enemy(&mut world, &mut rng, EnemyKind::Scout, enemy_position);
    world.spawn((
        Position(enemy_position),
        Velocity(Vec3::X * BULLET_SPEED),
        Projectile {
            life_ticks: BULLET_LIFE_TICKS,
            damage: BULLET_DAMAGE,
            owner: ProjectileOwner::Player,
        },
    ));
    (world, player, enemy)
}

#[test]
fn destroying_the_locked_target_clears_the_lock_in_the_same_pass() {
    let (mut world, player, enemy) = collision_fixture();
    world.get::<&mut Health>(enemy).unwrap().current = 10.0;
    world.get::<&mut WeaponStation>(player).unwrap().target = Some(id_of(enemy));

    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(&mut world, &mut score, &mut events, &mut buffer, 100, DT);

    assert!(!world.contains(enemy));
    assert_eq!(world.get::<&WeaponStation>(player).unwrap().target, None);
    assert_eq!(score.hits, 1);
    assert_eq!(score.score, SCORE_BULLET_HIT + SCORE_BULLET_KILL);
    assert_eq!(score.enemies_destroyed, 1);
}

#[test]
fn missile_guidance_drops_destroyed_targets() {
    let (mut world, player, enemy) = collision_fixture();
    world.get::<&mut Health>(enemy).unwrap().current = 10.0;
    let missile = weapons::spawn_missile(
        &mut world,
        player,
        Vec3::ZERO,
        Orientation::default(),
        PLAYER_HULL_RADIUS,
        enemy,
        ProjectileOwner::Player,
        0,
    );

    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(&mut world, &mut score, &mut events, &mut buffer, 100, DT);

    let guidance = world
        .get::<&skywarrior_core::components::HomingMissile>(missile)
        .unwrap();
    assert_eq!(guidance.target, None);
}

#[test]
fn enemy_bullet_damages_player_without_scoring() {
    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world);
    let player_position = world.get::<&Position>(player).unwrap().0;
    world.spawn((
        Position(player_position),
        Velocity(Vec3::X * BULLET_SPEED),
        Projectile {
            life_ticks: BULLET_LIFE_TICKS,
            damage: BULLET_DAMAGE,
            owner: ProjectileOwner::Enemy,
        },
    ));

    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(&mut world, &mut score, &mut events, &mut buffer, 0, DT);

    let health = world.get::<&Health>(player).unwrap().current;
    assert_eq!(health, PLAYER_MAX_HEALTH - BULLET_DAMAGE);
    assert_eq!(score.score, 0);
    assert_eq!(score.hits, 0);
}

#[test]
fn missile_grace_window_protects_its_firer() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    let position = Vec3::new(300.0, 100.0, 0.0);
    let enemy = world_setup::spawn_enemy(&mut world, &mut rng, EnemyKind::Assault, position);
    // A just-launched missile sitting on top of its own firer.
    weapons::spawn_missile(
        &mut world,
        enemy,
        position,
        Orientation::default(),
        0.0,
        enemy,
        ProjectileOwner::Enemy,
        1000,
    );

    let full_health = world.get::<&Health>(enemy).unwrap().current;
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let mut buffer = Vec::new();
    collision::run(&mut world, &mut score, &mut events, &mut buffer, 1000, DT);
    let health_in_grace = world.get::<&Health>(enemy).unwrap().current;

    let after_grace = 1000 + (MISSILE_GRACE_SECS * TICK_RATE as f32) as u64 + 1;
    collision::run(&mut world, &mut score, &mut events, &mut buffer, after_grace, DT);
    let health_after = world.get::<&Health>(enemy).unwrap().current;

    assert_eq!(health_in_grace, full_health, "no self-hit during grace");
    assert!(health_after < full_health, "grace expired, hit lands");
}

#[test]
fn mission_succeeds_one_tick_after_last_kill() {
    let mut engine = engine_with_seed(21);
    start_mission(&mut engine, 1);

    let enemies: Vec<hecs::Entity> = engine
        .world()
        .query::<&skywarrior_core::components::EnemyCraft>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for enemy in enemies {
        let _ = engine.world_mut().despawn(enemy);
    }

    let snapshot = engine.tick(&InputSnapshot::default());
    assert_eq!(snapshot.phase, GamePhase::MissionComplete);
    let outcome = snapshot.outcome.expect("outcome set at mission end");
    assert!(outcome.success);
    assert_eq!(outcome.mission_id, 1);
    assert_eq!(outcome.accuracy, 0.0, "no shots fired reports 0 accuracy");
}

#[test]
fn player_death_fails_the_mission() {
    let mut engine = engine_with_seed(22);
    start_mission(&mut engine, 1);

    let player: Option<hecs::Entity> = engine
        .world()
        .query::<&PlayerShip>()
        .iter()
        .map(|(entity, _)| entity)
        .next();
    engine
        .world_mut()
        .get::<&mut Health>(player.unwrap())
        .unwrap()
        .current = 0.0;

    let snapshot = engine.tick(&InputSnapshot::default());
    assert_eq!(snapshot.phase, GamePhase::MissionComplete);
    assert!(!snapshot.outcome.unwrap().success);
}

#[test]
fn pause_freezes_the_world() {
    let mut engine = engine_with_seed(23);
    start_mission(&mut engine, 1);
    let input = InputSnapshot {
        throttle_up: true,
        ..Default::default()
    };
    engine.tick(&input);

    engine.queue_command(PlayerCommand::Pause);
    let frozen = engine.tick(&input);
    assert_eq!(frozen.phase, GamePhase::Paused);
    let frozen_json = serde_json::to_string(&frozen).unwrap();

    for _ in 0..10 {
        let still = engine.tick(&input);
        assert_eq!(serde_json::to_string(&still).unwrap(), frozen_json);
    }

    engine.queue_command(PlayerCommand::Resume);
    let resumed = engine.tick(&input);
    assert_eq!(resumed.phase, GamePhase::Playing);
    assert_ne!(serde_json::to_string(&resumed).unwrap(), frozen_json);
}

#[test]
fn cannon_fire_consumes_ammo_and_counts_a_shot() {
    let mut engine = engine_with_seed(24);
    start_mission(&mut engine, 1);
    engine.queue_command(PlayerCommand::FirePrimary);
    let snapshot = engine.tick(&InputSnapshot::default());

    assert_eq!(snapshot.hud.cannon_rounds, CANNON_ROUNDS - 1);
    assert!(snapshot.bullets.iter().any(|b| b.from_player));
}

#[test]
fn missile_launch_requires_a_live_lock() {
    let mut engine = engine_with_seed(25);
    start_mission(&mut engine, 1);

    engine.queue_command(PlayerCommand::SelectWeapon {
        weapon: WeaponKind::Missiles,
    });
    engine.queue_command(PlayerCommand::FireMissile);
    let snapshot = engine.tick(&InputSnapshot::default());
    assert_eq!(snapshot.hud.missile_rounds, MISSILE_ROUNDS);
    assert!(!snapshot.missiles.iter().any(|m| m.from_player));

    engine.queue_command(PlayerCommand::LockTarget);
    engine.queue_command(PlayerCommand::FireMissile);
    let snapshot = engine.tick(&InputSnapshot::default());
    assert_eq!(snapshot.hud.missile_rounds, MISSILE_ROUNDS - 1);
    assert!(snapshot.missiles.iter().any(|m| m.from_player));
}

#[test]
fn cycle_target_wraps_around_the_wave() {
    let mut engine = engine_with_seed(26);
    start_mission(&mut engine, 1);

    let mut locked: Vec<EntityId> = Vec::new();
    for _ in 0..4 {
        engine.queue_command(PlayerCommand::CycleTarget);
        let snapshot = engine.tick(&InputSnapshot::default());
        let id = snapshot
            .enemies
            .iter()
            .find(|e| e.locked)
            .map(|e| e.id)
            .expect("a target is locked after cycling");
        locked.push(id);
    }
    assert_eq!(locked[0], locked[3], "three enemies, fourth cycle wraps");
    assert_ne!(locked[0], locked[1]);
    assert_ne!(locked[1], locked[2]);
}

#[test]
fn return_to_menu_clears_everything() {
    let mut engine = engine_with_seed(27);
    start_mission(&mut engine, 1);
    engine.queue_command(PlayerCommand::ReturnToMenu);
    let snapshot = engine.tick(&InputSnapshot::default());

    assert_eq!(snapshot.phase, GamePhase::Menu);
    assert!(snapshot.player.is_none());
    assert!(snapshot.enemies.is_empty());
    assert_eq!(snapshot.mission_id, None);
    assert_eq!(snapshot.time.tick, 0);
}

#[test]
fn unknown_mission_id_is_ignored() {
    let mut engine = engine_with_seed(28);
    engine.queue_command(PlayerCommand::StartMission { mission_id: 99 });
    let snapshot = engine.tick(&InputSnapshot::default());
    assert_eq!(snapshot.phase, GamePhase::Menu);
}

#[test]
fn radar_reports_contacts_relative_to_the_player() {
    let mut engine = engine_with_seed(29);
    start_mission(&mut engine, 1);
    let snapshot = engine.tick(&InputSnapshot::default());

    let player = snapshot.player.as_ref().unwrap();
    for contact in &snapshot.radar {
        assert!(contact.relative.length() <= RADAR_RANGE + 1.0);
        let enemy = snapshot
            .enemies
            .iter()
            .find(|e| e.id == contact.id)
            .expect("radar contact matches a live enemy");
        let expected = enemy.position - player.position;
        assert!((contact.relative - expected).length() < 1e-3);
    }
}
