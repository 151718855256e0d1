//! Core types and definitions for the SKY WARRIOR combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input snapshots, state snapshots, events, and
//! constants. It has no dependency on any ECS or runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
