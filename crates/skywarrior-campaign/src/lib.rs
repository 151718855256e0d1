//! Campaign structure and persistence for SKY WARRIOR.
//!
//! Holds the static mission table, unlock gating, and the key-value
//! store used for completed-mission progress and player settings.

pub mod missions;
pub mod progress;
pub mod store;
