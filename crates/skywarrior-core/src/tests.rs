#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::PlayerCommand;
    use crate::components::{AiMemory, Health, WeaponStation};
    use crate::enums::*;
    use crate::state::GameStateSnapshot;
    use crate::types::{Orientation, SimTime};

    #[test]
    fn test_enemy_kind_parse() {
        assert_eq!(EnemyKind::parse("scout"), Some(EnemyKind::Scout));
        assert_eq!(EnemyKind::parse("assault"), Some(EnemyKind::Assault));
        assert_eq!(EnemyKind::parse("heavy"), Some(EnemyKind::Heavy));
        assert_eq!(EnemyKind::parse("bomber"), None);
        assert_eq!(EnemyKind::parse(""), None);
    }

    #[test]
    fn test_enums_serde_roundtrip() {
        let phases = vec![
            GamePhase::Menu,
            GamePhase::Playing,
            GamePhase::Paused,
            GamePhase::MissionComplete,
        ];
        for v in phases {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }

        let states = vec![AiState::Approach, AiState::Circle, AiState::Evade];
        for v in states {
            let json = serde_json::to_string(&v).unwrap();
            let back: AiState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_health_clamps_at_zero() {
        let mut health = Health::full();
        assert!(!health.apply_damage(30.0));
        assert!((health.current - 70.0).abs() < f32::EPSILON);

        // Overkill damage clamps rather than going negative.
        let destroyed = health.apply_damage(500.0);
        assert!(destroyed);
        assert_eq!(health.current, 0.0);

        // Further damage on a dead entity does not re-report destruction.
        assert!(!health.apply_damage(10.0));
        assert_eq!(health.current, 0.0);
    }

    #[test]
    fn test_orientation_forward() {
        let ident = Orientation::default();
        assert!((ident.forward() - Vec3::X).length() < 1e-6);

        let facing_z = Orientation::facing(Vec3::Z);
        assert!((facing_z.forward() - Vec3::Z).length() < 1e-5);

        // Degenerate direction falls back to identity.
        let degenerate = Orientation::facing(Vec3::ZERO);
        assert!((degenerate.forward() - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_orientation_rotate_local_yaw() {
        let mut o = Orientation::default();
        o.rotate_local(Vec3::Y, std::f32::consts::FRAC_PI_2);
        // Yawing 90 degrees about +Y takes +X forward to -Z.
        assert!((o.forward() - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_defaults() {
        let station = WeaponStation::default();
        assert_eq!(station.cannon_rounds, crate::constants::CANNON_ROUNDS);
        assert_eq!(station.missile_rounds, crate::constants::MISSILE_ROUNDS);
        assert_eq!(station.selected, WeaponKind::Cannon);
        assert!(station.target.is_none());

        let memory = AiMemory::default();
        assert_eq!(memory.state, AiState::Approach);
        assert_eq!(memory.evasion_timer, 0.0);
    }

    #[test]
    fn test_command_serde() {
        let cmd = PlayerCommand::StartMission { mission_id: 3 };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("StartMission"));
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PlayerCommand::StartMission { mission_id: 3 }));
    }

    #[test]
    fn test_snapshot_default_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::Menu);
        assert!(back.player.is_none());
        assert!(back.outcome.is_none());
    }
}
