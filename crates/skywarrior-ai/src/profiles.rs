//! Per-kind behavioral profiles and instance stamping.
//!
//! The static table defines base stats for each enemy kind; `stamp`
//! produces a concrete `EnemyCraft` with seeded per-instance variation
//! so no two craft of the same kind fly identically.

use rand::Rng;

use skywarrior_core::components::EnemyCraft;
use skywarrior_core::enums::EnemyKind;

/// Base stats for an enemy kind. Spread fields are the width of the
/// uniform variation added on top of the base at spawn.
pub struct BehaviorProfile {
    pub max_health: f32,
    pub speed_base: f32,
    pub speed_spread: f32,
    pub aggressiveness_base: f32,
    pub aggressiveness_spread: f32,
    pub attack_distance_base: f32,
    pub attack_distance_spread: f32,
    pub retreat_distance: f32,
    pub can_evade: bool,
    pub can_fire_missiles: bool,
    /// Per-second missile fire probability while in envelope.
    pub missile_fire_chance: f32,
    pub hull_radius: f32,
}

/// Get the behavioral profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> BehaviorProfile {
    match kind {
        EnemyKind::Scout => BehaviorProfile {
            max_health: 60.0,
            speed_base: 180.0,
            speed_spread: 60.0,
            aggressiveness_base: 0.5,
            aggressiveness_spread: 0.3,
            attack_distance_base: 250.0,
            attack_distance_spread: 200.0,
            retreat_distance: 100.0,
            can_evade: true,
            can_fire_missiles: false,
            missile_fire_chance: 0.0,
            hull_radius: 8.0,
        },
        EnemyKind::Assault => BehaviorProfile {
            max_health: 100.0,
            speed_base: 140.0,
            speed_spread: 40.0,
            aggressiveness_base: 0.6,
            aggressiveness_spread: 0.3,
            attack_distance_base: 300.0,
            attack_distance_spread: 200.0,
            retreat_distance: 120.0,
            can_evade: true,
            can_fire_missiles: true,
            missile_fire_chance: 0.15,
            hull_radius: 10.0,
        },
        EnemyKind::Heavy => BehaviorProfile {
            max_health: 180.0,
            speed_base: 100.0,
            speed_spread: 20.0,
            aggressiveness_base: 0.7,
            aggressiveness_spread: 0.2,
            attack_distance_base: 400.0,
            attack_distance_spread: 200.0,
            retreat_distance: 150.0,
            can_evade: false,
            can_fire_missiles: true,
            missile_fire_chance: 0.25,
            hull_radius: 14.0,
        },
    }
}

/// Stamp a concrete enemy instance from the kind's profile.
pub fn stamp(kind: EnemyKind, rng: &mut impl Rng) -> (EnemyCraft, f32) {
    let profile = get_profile(kind);
    let craft = EnemyCraft {
        kind,
        speed: profile.speed_base + rng.gen::<f32>() * profile.speed_spread,
        aggressiveness: (profile.aggressiveness_base
            + rng.gen::<f32>() * profile.aggressiveness_spread)
            .min(1.0),
        attack_distance: profile.attack_distance_base
            + rng.gen::<f32>() * profile.attack_distance_spread,
        retreat_distance: profile.retreat_distance,
        can_evade: profile.can_evade,
        can_fire_missiles: profile.can_fire_missiles,
        missile_fire_chance: profile.missile_fire_chance,
        hull_radius: profile.hull_radius,
    };
    (craft, profile.max_health)
}
