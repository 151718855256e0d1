//! The simulation engine: entity registry, command queue, phase
//! machine, and the fixed-order system pipeline.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skywarrior_campaign::missions;
use skywarrior_core::commands::PlayerCommand;
use skywarrior_core::components::{
    EnemyCraft, Health, PlayerShip, WeaponStation,
};
use skywarrior_core::constants::{DT, PLAYER_HULL_RADIUS};
use skywarrior_core::enums::{GamePhase, ProjectileOwner, WeaponKind};
use skywarrior_core::events::CombatEvent;
use skywarrior_core::input::{InputSnapshot, PlayerSettings};
use skywarrior_core::state::{GameStateSnapshot, MissionOutcome};
use skywarrior_core::types::{Orientation, Position, SimTime};

use crate::score::ScoreState;
use crate::systems::{collision, enemy_ai, player_physics, snapshot, weapons};
use crate::world_setup;
use crate::{id_of, resolve};

/// Engine construction parameters.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed. Two engines with the same seed and the same inputs
    /// produce identical runs.
    pub seed: u64,
    pub settings: PlayerSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: PlayerSettings::default(),
        }
    }
}

/// The running simulation. One instance per game session; the embedding
/// application calls [`tick`](Self::tick) at the fixed rate and renders
/// the returned snapshot.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    settings: PlayerSettings,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<CombatEvent>,
    score: ScoreState,
    mission_id: Option<u32>,
    outcome: Option<MissionOutcome>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Menu,
            settings: config.settings,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            mission_id: None,
            outcome: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Replace the control settings (applied from the next tick).
    pub fn set_settings(&mut self, settings: PlayerSettings) {
        self.settings = settings;
    }

    /// Direct registry access for embedders and tests.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct mutable registry access for embedders and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Enqueue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation one fixed step and return the resulting
    /// snapshot. Commands queued since the last tick are applied first;
    /// systems only run in the `Playing` phase, so pausing freezes the
    /// world exactly as it stands.
    pub fn tick(&mut self, input: &InputSnapshot) -> GameStateSnapshot {
        self.process_commands();

        // Completion is checked against the world as it stood at the
        // end of the previous tick: a mission ends one tick after the
        // terminal condition arises.
        if self.phase == GamePhase::Playing {
            self.check_mission_end();
        }

        if self.phase == GamePhase::Playing {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build(
            &self.world,
            self.time,
            self.phase,
            self.mission_id,
            &self.score,
            self.outcome.clone(),
            events,
        )
    }

    fn run_systems(&mut self, input: &InputSnapshot) {
        player_physics::run(&mut self.world, input, &self.settings, DT);
        enemy_ai::run(
            &mut self.world,
            &mut self.rng,
            self.time.tick,
            DT,
            &mut self.events,
        );
        weapons::run(&mut self.world, self.time.tick, DT, &mut self.despawn_buffer);
        collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
            self.time.tick,
            DT,
        );
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        debug!(?command, phase = ?self.phase, "command");
        match command {
            PlayerCommand::StartMission { mission_id } => {
                if matches!(self.phase, GamePhase::Playing | GamePhase::Paused) {
                    warn!(mission_id, "ignoring mission start while airborne");
                } else {
                    self.start_mission(mission_id);
                }
            }
            PlayerCommand::RestartMission => {
                if let Some(mission_id) = self.mission_id {
                    self.start_mission(mission_id);
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                self.world.clear();
                self.command_queue.clear();
                self.events.clear();
                self.score = ScoreState::default();
                self.time = SimTime::default();
                self.mission_id = None;
                self.outcome = None;
                self.phase = GamePhase::Menu;
            }
            PlayerCommand::FirePrimary if self.phase == GamePhase::Playing => {
                self.fire_primary();
            }
            PlayerCommand::FireMissile if self.phase == GamePhase::Playing => {
                self.fire_missile();
            }
            PlayerCommand::SelectWeapon { weapon } if self.phase == GamePhase::Playing => {
                for (_, station) in self.world.query_mut::<&mut WeaponStation>() {
                    station.selected = weapon;
                }
            }
            PlayerCommand::CycleTarget if self.phase == GamePhase::Playing => {
                self.cycle_target();
            }
            PlayerCommand::LockTarget if self.phase == GamePhase::Playing => {
                self.lock_nearest_target();
            }
            // Combat commands outside the Playing phase.
            _ => {}
        }
    }

    fn start_mission(&mut self, mission_id: u32) {
        let Some(mission) = missions::get_mission(mission_id) else {
            warn!(mission_id, "unknown mission id");
            return;
        };

        self.world.clear();
        self.despawn_buffer.clear();
        self.events.clear();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.outcome = None;
        self.mission_id = Some(mission_id);

        world_setup::spawn_player(&mut self.world);
        world_setup::spawn_enemy_wave(&mut self.world, &mut self.rng, mission);

        self.phase = GamePhase::Playing;
        info!(mission_id, name = mission.name, enemies = mission.enemies, "mission start");
    }

    fn check_mission_end(&mut self) {
        let Some(mission_id) = self.mission_id else {
            return;
        };
        if self.player_dead() {
            self.end_mission(mission_id, false);
        } else if self.world.query::<&EnemyCraft>().iter().next().is_none() {
            self.end_mission(mission_id, true);
        }
    }

    fn end_mission(&mut self, mission_id: u32, success: bool) {
        self.outcome = Some(MissionOutcome {
            mission_id,
            success,
            score: self.score.score,
            hits: self.score.hits,
            shots_fired: self.score.shots_fired,
            accuracy: self.score.accuracy(),
            elapsed_secs: self.time.elapsed_secs,
        });
        self.phase = GamePhase::MissionComplete;
        info!(
            mission_id,
            success,
            score = self.score.score,
            elapsed_secs = self.time.elapsed_secs,
            "mission over"
        );
    }

    fn player_dead(&self) -> bool {
        self.world
            .query::<(&PlayerShip, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, health))| health.is_dead())
            .unwrap_or(true)
    }

    fn fire_primary(&mut self) {
        let mut shot = None;
        for (_, (_, position, orientation, station)) in self.world.query_mut::<(
            &PlayerShip,
            &Position,
            &Orientation,
            &mut WeaponStation,
        )>() {
            if station.selected == WeaponKind::Cannon && station.cannon_rounds > 0 {
                station.cannon_rounds -= 1;
                shot = Some((position.0, orientation.forward()));
            }
        }
        if let Some((origin, direction)) = shot {
            weapons::spawn_bullet(&mut self.world, origin, direction, ProjectileOwner::Player);
            self.score.shots_fired += 1;
            self.events.push(CombatEvent::CannonFired { by_player: true });
        }
    }

    fn fire_missile(&mut self) {
        let candidate = self
            .world
            .query::<(&PlayerShip, &Position, &Orientation, &WeaponStation)>()
            .iter()
            .next()
            .map(|(entity, (_, position, orientation, station))| {
                (entity, position.0, *orientation, station.clone())
            });
        let Some((firer, position, orientation, station)) = candidate else {
            return;
        };
        if station.selected != WeaponKind::Missiles || station.missile_rounds == 0 {
            return;
        }
        // A live locked target is required.
        let Some(target) = station
            .target
            .and_then(resolve)
            .filter(|t| self.world.contains(*t))
        else {
            return;
        };

        if let Ok(mut station) = self.world.get::<&mut WeaponStation>(firer) {
            station.missile_rounds -= 1;
        }
        weapons::spawn_missile(
            &mut self.world,
            firer,
            position,
            orientation,
            PLAYER_HULL_RADIUS,
            target,
            ProjectileOwner::Player,
            self.time.tick,
        );
        self.score.shots_fired += 1;
        self.events.push(CombatEvent::MissileLaunched { by_player: true });
    }

    /// Advance the lock to the next enemy in registry order, wrapping.
    fn cycle_target(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&EnemyCraft>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();

        let next = if enemies.is_empty() {
            None
        } else {
            let current = self.current_target();
            let index = current
                .and_then(|c| enemies.iter().position(|&e| e == c))
                .map(|i| (i + 1) % enemies.len())
                .unwrap_or(0);
            Some(id_of(enemies[index]))
        };

        for (_, station) in self.world.query_mut::<&mut WeaponStation>() {
            station.target = next;
        }
    }

    /// Lock the nearest enemy if no live lock is held.
    fn lock_nearest_target(&mut self) {
        if self
            .current_target()
            .is_some_and(|t| self.world.contains(t))
        {
            return;
        }
        let Some(player_position) = self
            .world
            .query::<(&PlayerShip, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, position))| position.0)
        else {
            return;
        };

        let nearest = self
            .world
            .query::<(&EnemyCraft, &Position)>()
            .iter()
            .map(|(entity, (_, position))| (entity, position.0.distance(player_position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(entity, _)| id_of(entity));

        for (_, station) in self.world.query_mut::<&mut WeaponStation>() {
            station.target = nearest;
        }
    }

    fn current_target(&self) -> Option<Entity> {
        self.world
            .query::<&WeaponStation>()
            .iter()
            .next()
            .and_then(|(_, station)| station.target)
            .and_then(resolve)
    }
}
