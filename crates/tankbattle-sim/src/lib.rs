//! Simulation engine for the tank battle.
//!
//! Owns the hecs ECS world, runs the per-frame systems in a fixed order,
//! drives the match state machine and produces `GameStateSnapshot`s.

pub mod combatant;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use tankbattle_core as core;
