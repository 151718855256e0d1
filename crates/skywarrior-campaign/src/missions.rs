//! Static mission definitions and unlock gating.

use serde::{Deserialize, Serialize};

/// Difficulty tier, carried as metadata for the briefing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A single mission's parameters.
#[derive(Debug, Clone, Serialize)]
pub struct MissionDef {
    pub id: u32,
    pub name: &'static str,
    pub objective: &'static str,
    /// Number of enemies spawned at mission start.
    pub enemies: u32,
    /// Advisory time limit in seconds (briefing metadata, not enforced).
    pub time_limit_secs: u32,
    pub difficulty: Difficulty,
    /// Enemy kind identifiers the spawner draws from. Unrecognized
    /// names fall back to the default kind with a logged warning.
    pub enemy_pool: &'static [&'static str],
}

/// The campaign's mission table, in play order.
pub fn mission_table() -> &'static [MissionDef] {
    const MISSIONS: &[MissionDef] = &[
        MissionDef {
            id: 1,
            name: "TRAINING FLIGHT",
            objective: "Destroy 3 training targets",
            enemies: 3,
            time_limit_secs: 300,
            difficulty: Difficulty::Easy,
            enemy_pool: &["scout"],
        },
        MissionDef {
            id: 2,
            name: "FIRST CONTACT",
            objective: "Eliminate enemy patrol",
            enemies: 5,
            time_limit_secs: 420,
            difficulty: Difficulty::Easy,
            enemy_pool: &["scout", "assault"],
        },
        MissionDef {
            id: 3,
            name: "AIR SUPERIORITY",
            objective: "Clear the airspace",
            enemies: 8,
            time_limit_secs: 600,
            difficulty: Difficulty::Medium,
            enemy_pool: &["scout", "assault", "heavy"],
        },
        MissionDef {
            id: 4,
            name: "DEEP STRIKE",
            objective: "Destroy ground targets",
            enemies: 6,
            time_limit_secs: 480,
            difficulty: Difficulty::Medium,
            enemy_pool: &["assault", "heavy"],
        },
        MissionDef {
            id: 5,
            name: "ACE COMBAT",
            objective: "Defeat the enemy ace",
            enemies: 1,
            time_limit_secs: 900,
            difficulty: Difficulty::Hard,
            enemy_pool: &["heavy"],
        },
    ];
    MISSIONS
}

/// Look up a mission by id.
pub fn get_mission(id: u32) -> Option<&'static MissionDef> {
    mission_table().iter().find(|m| m.id == id)
}

/// A mission is playable if it is the first, or its predecessor has
/// been completed.
pub fn is_unlocked(id: u32, completed: &[u32]) -> bool {
    id == 1 || completed.contains(&(id - 1))
}
