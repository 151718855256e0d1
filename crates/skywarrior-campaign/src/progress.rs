//! Completed-mission progress and player settings persistence.
//!
//! Malformed or missing persisted data falls back to built-in defaults;
//! write failures are reported but never fatal.

use tracing::warn;

use skywarrior_core::input::PlayerSettings;

use crate::store::{KeyValueStore, StoreError};

/// Store key for the JSON-encoded array of completed mission ids.
pub const COMPLETED_KEY: &str = "skywarrior_completed";

/// Store key for the JSON-encoded player settings.
pub const SETTINGS_KEY: &str = "skywarrior_settings";

/// Load the list of completed mission ids. Missing or malformed data
/// yields the empty default.
pub fn load_completed(store: &impl KeyValueStore) -> Vec<u32> {
    let Some(raw) = store.get(COMPLETED_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(ids) => ids,
        Err(err) => {
            warn!(%err, "malformed completed-mission data, using defaults");
            Vec::new()
        }
    }
}

/// Record a mission completion, deduplicating ids.
pub fn record_completion(store: &mut impl KeyValueStore, mission_id: u32) -> Result<(), StoreError> {
    let mut completed = load_completed(store);
    if !completed.contains(&mission_id) {
        completed.push(mission_id);
    }
    store.set(COMPLETED_KEY, &serde_json::to_string(&completed)?)
}

/// Load player settings, falling back silently to defaults on missing
/// or malformed data.
pub fn load_settings(store: &impl KeyValueStore) -> PlayerSettings {
    store
        .get(SETTINGS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist player settings.
pub fn save_settings(
    store: &mut impl KeyValueStore,
    settings: &PlayerSettings,
) -> Result<(), StoreError> {
    store.set(SETTINGS_KEY, &serde_json::to_string(settings)?)
}
