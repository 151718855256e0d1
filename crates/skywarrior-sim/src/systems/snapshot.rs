//! Snapshot builder: a read-only pass over the registry producing the
//! complete visible state for this tick.

use hecs::World;

use skywarrior_core::components::{
    AiMemory, EnemyCraft, FlightState, Health, HomingMissile, PlayerShip, Projectile,
    WeaponStation,
};
use skywarrior_core::constants::{MAX_AFTERBURNER_FUEL, RADAR_RANGE};
use skywarrior_core::enums::{GamePhase, ProjectileOwner};
use skywarrior_core::events::CombatEvent;
use skywarrior_core::state::{
    BulletView, EnemyView, GameStateSnapshot, HudView, MissileView, MissionOutcome, PlayerView,
    RadarContact,
};
use skywarrior_core::types::{Orientation, Position, SimTime, Velocity};

use crate::id_of;
use crate::score::ScoreState;

/// Build the snapshot for the current tick. `events` is the drained
/// event queue; the caller hands ownership over.
pub fn build(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    mission_id: Option<u32>,
    score: &ScoreState,
    outcome: Option<MissionOutcome>,
    events: Vec<CombatEvent>,
) -> GameStateSnapshot {
    let mut snapshot = GameStateSnapshot {
        time,
        phase,
        mission_id,
        outcome,
        events,
        ..Default::default()
    };

    let mut locked_target = None;
    let mut player_position = None;

    for (_, (_, position, orientation, velocity, flight, health, station)) in world
        .query::<(
            &PlayerShip,
            &Position,
            &Orientation,
            &Velocity,
            &FlightState,
            &Health,
            &WeaponStation,
        )>()
        .iter()
    {
        locked_target = station.target;
        player_position = Some(position.0);
        snapshot.player = Some(PlayerView {
            position: position.0,
            orientation: orientation.0,
            velocity: velocity.0,
            afterburner_on: flight.afterburner_on,
        });
        snapshot.hud = HudView {
            speed: velocity.0.length(),
            altitude: position.0.y.max(0.0),
            throttle_pct: flight.throttle * 100.0,
            g_force: flight.g_force,
            health_pct: health.current,
            afterburner_pct: flight.afterburner_fuel / MAX_AFTERBURNER_FUEL * 100.0,
            cannon_rounds: station.cannon_rounds,
            missile_rounds: station.missile_rounds,
            selected_weapon: station.selected,
            score: score.score,
        };
    }

    for (entity, (craft, position, orientation, velocity, health, memory)) in world
        .query::<(
            &EnemyCraft,
            &Position,
            &Orientation,
            &Velocity,
            &Health,
            &AiMemory,
        )>()
        .iter()
    {
        let id = id_of(entity);
        let locked = locked_target == Some(id);
        snapshot.enemies.push(EnemyView {
            id,
            kind: craft.kind,
            position: position.0,
            orientation: orientation.0,
            health: health.current,
            ai_state: memory.state,
            locked,
        });
        if let Some(player_position) = player_position {
            let relative = position.0 - player_position;
            if relative.length() <= RADAR_RANGE {
                snapshot.radar.push(RadarContact {
                    id,
                    relative,
                    heading: velocity.0.z.atan2(velocity.0.x),
                    locked,
                });
            }
        }
    }

    for (_, (projectile, position)) in world.query::<(&Projectile, &Position)>().iter() {
        snapshot.bullets.push(BulletView {
            position: position.0,
            from_player: projectile.owner == ProjectileOwner::Player,
        });
    }

    for (_, (missile, position, orientation)) in world
        .query::<(&HomingMissile, &Position, &Orientation)>()
        .iter()
    {
        snapshot.missiles.push(MissileView {
            position: position.0,
            orientation: orientation.0,
            from_player: missile.owner == ProjectileOwner::Player,
        });
    }

    snapshot
}
