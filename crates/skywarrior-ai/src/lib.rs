//! Enemy behavior logic for SKY WARRIOR.
//!
//! Pure functions that compute steering and firing decisions for enemy
//! craft based on their stamped stats, current AI memory, and the
//! tactical situation. No ECS dependency — operates on plain data.

pub mod decision;
pub mod profiles;
