//! Per-tick enemy decision function.
//!
//! Evaluates threat evasion, positioning, and firing for one enemy craft.
//! Randomness comes from the injected RNG so trajectories are
//! reproducible under a fixed seed.

use glam::Vec3;
use rand::Rng;

use skywarrior_core::components::{AiMemory, EnemyCraft};
use skywarrior_core::constants::*;
use skywarrior_core::enums::AiState;

/// A live bullet, as seen by the threat scanner.
#[derive(Debug, Clone, Copy)]
pub struct BulletThreat {
    pub position: Vec3,
    pub velocity: Vec3,
    pub from_player: bool,
}

/// A live missile, as seen by the threat scanner.
#[derive(Debug, Clone, Copy)]
pub struct MissileThreat {
    pub position: Vec3,
    /// Whether the missile's guidance target is this enemy.
    pub targets_me: bool,
}

/// Input to the decision function for a single enemy.
pub struct AiContext<'a> {
    pub craft: &'a EnemyCraft,
    pub memory: &'a AiMemory,
    pub position: Vec3,
    pub forward: Vec3,
    pub player_position: Vec3,
    pub player_velocity: Vec3,
    pub bullets: &'a [BulletThreat],
    pub missiles: &'a [MissileThreat],
    pub current_tick: u64,
    pub dt: f32,
}

/// Output of the decision function.
pub struct AiDecision {
    /// Updated AI memory to write back to the entity.
    pub memory: AiMemory,
    /// Desired velocity (steering direction scaled by the craft's speed).
    /// The movement system smooths actual velocity toward this.
    pub target_velocity: Vec3,
    /// Direction to fire a cannon round, if the gates passed.
    pub fire_bullet: Option<Vec3>,
    /// Whether to launch a missile at the player this tick.
    pub fire_missile: bool,
}

/// Evaluate one enemy for one tick.
pub fn decide(ctx: &AiContext<'_>, rng: &mut impl Rng) -> AiDecision {
    let mut memory = ctx.memory.clone();
    memory.evasion_timer = (memory.evasion_timer - ctx.dt).max(0.0);

    let to_player = ctx.player_position - ctx.position;
    let distance = to_player.length();
    let dir_to_player = to_player.normalize_or_zero();

    // Horizontal perpendicular to the line-of-sight, used for circling
    // and retreat weaving.
    let perpendicular = Vec3::new(-dir_to_player.z, 0.0, dir_to_player.x);

    let mut steering = if let Some(evade) = detect_threat(ctx, rng) {
        memory.state = AiState::Evade;
        memory.evasion_timer = evade.duration;
        memory.evasion_steer = evade.steer;
        evade.steer
    } else if memory.state == AiState::Evade && memory.evasion_timer > 0.0 {
        memory.evasion_steer
    } else if distance < ctx.craft.retreat_distance {
        // Too close: break away, weaving if the craft can evade.
        memory.state = AiState::Evade;
        memory.evasion_timer = MISSILE_EVADE_SECS;
        let mut steer = -dir_to_player;
        if ctx.craft.can_evade {
            steer += perpendicular * EVADE_STRENGTH * memory.circle_dir;
        }
        memory.evasion_steer = steer;
        steer
    } else if distance > ctx.craft.attack_distance {
        memory.state = AiState::Approach;
        dir_to_player
    } else {
        memory.state = AiState::Circle;
        if rng.gen::<f32>() < CIRCLE_FLIP_PROB {
            memory.circle_dir = -memory.circle_dir;
        }
        let mut steer = perpendicular * memory.circle_dir * 0.7;
        let distance_error = distance - ctx.craft.attack_distance;
        if distance_error.abs() > CIRCLE_DISTANCE_BAND {
            // Pull back toward the preferred engagement range.
            let correction = if distance_error > 0.0 { 0.3 } else { -0.3 };
            steer += dir_to_player * correction;
        }
        steer
    };

    // Small isotropic jitter for unpredictability.
    steering += Vec3::new(
        (rng.gen::<f32>() - 0.5) * 0.2,
        (rng.gen::<f32>() - 0.5) * 0.1,
        (rng.gen::<f32>() - 0.5) * 0.2,
    );

    let target_velocity = steering.normalize_or_zero() * ctx.craft.speed;

    let fire_bullet = decide_cannon(ctx, distance, dir_to_player, rng);
    let fire_missile = decide_missile(ctx, &mut memory, distance, dir_to_player, rng);

    AiDecision {
        memory,
        target_velocity,
        fire_bullet,
        fire_missile,
    }
}

struct EvadeOrder {
    steer: Vec3,
    duration: f32,
}

/// Scan for incoming fire. Bullet threats take precedence; the missile
/// scan only runs when no bullet threat was found. Craft that cannot
/// evade ignore threats entirely.
fn detect_threat(ctx: &AiContext<'_>, rng: &mut impl Rng) -> Option<EvadeOrder> {
    if !ctx.craft.can_evade {
        return None;
    }

    for bullet in ctx.bullets.iter().filter(|b| b.from_player) {
        let to_me = ctx.position - bullet.position;
        if to_me.length() > BULLET_THREAT_RADIUS {
            continue;
        }
        let bullet_dir = bullet.velocity.normalize_or_zero();
        if bullet_dir.dot(to_me) > 0.0 {
            // Inbound: break perpendicular to the bullet's path.
            let perp = Vec3::new(-bullet_dir.z, 0.0, bullet_dir.x);
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            return Some(EvadeOrder {
                steer: perp * sign * EVADE_STRENGTH,
                duration: BULLET_EVADE_SECS,
            });
        }
    }

    for missile in ctx.missiles.iter().filter(|m| m.targets_me) {
        let to_me = ctx.position - missile.position;
        if to_me.length() < MISSILE_THREAT_RADIUS {
            let threat_dir = to_me.normalize_or_zero();
            let perp = Vec3::new(-threat_dir.z, 0.0, threat_dir.x);
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            return Some(EvadeOrder {
                steer: perp * sign * EVADE_STRENGTH * 2.0,
                duration: MISSILE_EVADE_SECS,
            });
        }
    }

    None
}

/// Cannon gate: range window, aim cone, then an aggressiveness-scaled
/// probability roll. Fired rounds lead the player linearly.
fn decide_cannon(
    ctx: &AiContext<'_>,
    distance: f32,
    dir_to_player: Vec3,
    rng: &mut impl Rng,
) -> Option<Vec3> {
    if distance >= ENEMY_FIRE_MAX_RANGE || distance <= ENEMY_FIRE_MIN_RANGE {
        return None;
    }
    if dir_to_player.dot(ctx.forward) <= ENEMY_AIM_CONE {
        return None;
    }
    if rng.gen::<f32>() >= ctx.craft.aggressiveness * ctx.dt * ENEMY_FIRE_PROB_SCALE {
        return None;
    }

    let time_to_hit = distance / BULLET_SPEED;
    let lead_position = ctx.player_position + ctx.player_velocity * time_to_hit;
    Some((lead_position - ctx.position).normalize_or_zero())
}

/// Missile gate: armed craft only, wider aim cone, per-type chance roll,
/// and a cooldown since the last launch.
fn decide_missile(
    ctx: &AiContext<'_>,
    memory: &mut AiMemory,
    distance: f32,
    dir_to_player: Vec3,
    rng: &mut impl Rng,
) -> bool {
    if !ctx.craft.can_fire_missiles || distance >= ENEMY_MISSILE_RANGE {
        return false;
    }
    if dir_to_player.dot(ctx.forward) <= ENEMY_MISSILE_AIM_CONE {
        return false;
    }
    if let Some(last) = memory.last_missile_tick {
        let since = (ctx.current_tick.saturating_sub(last)) as f32 * ctx.dt;
        if since < ENEMY_MISSILE_COOLDOWN_SECS {
            return false;
        }
    }
    if rng.gen::<f32>() >= ctx.craft.missile_fire_chance * ctx.dt {
        return false;
    }

    memory.last_missile_tick = Some(ctx.current_tick);
    true
}
