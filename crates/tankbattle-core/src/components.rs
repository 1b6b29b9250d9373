//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the simulation crate, not in components.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::input::KeyBindings;

/// Position and heading of a combatant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec2,
    /// Radians, 0 = north, clockwise positive. Not normalized.
    pub heading: f64,
}

/// Scalar (signed) speed and its limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    /// Forward speed in units/frame; negative reverses.
    pub speed: f64,
    pub max_speed: f64,
    /// Turn rate in degrees per frame.
    pub rotation_rate_deg: f64,
}

/// Health and square footprint (collision circle diameter).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hull {
    /// Always within `[0, MAX_HEALTH]`.
    pub health: f64,
    pub footprint: f64,
}

/// Weapon statistics, mutated by upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub damage: f64,
    pub projectile_speed: f64,
    pub reload_ms: f64,
    pub max_range: f64,
}

/// A straight-line shell owned by exactly one combatant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: DVec2,
    /// Inherited from the firer at spawn time, fixed thereafter.
    pub heading: f64,
    pub speed: f64,
    pub damage: f64,
    pub traveled: f64,
    pub max_range: f64,
    pub player_owned: bool,
    pub active: bool,
}

/// Gun, cooldown timer and the shells currently in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armament {
    pub weapon: WeaponStats,
    /// Milliseconds of simulated time since the last shot.
    pub since_last_fire_ms: f64,
    pub projectiles: Vec<Projectile>,
}

/// Marks a player-controlled combatant and carries its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pilot {
    /// 0-based player slot.
    pub slot: u8,
    pub score: u32,
}

/// Behavior strategy, selected when the combatant is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    /// Reads bound keys from the held-key map each frame.
    Player(KeyBindings),
    /// Driven by the AI steering controller.
    Ai,
}

/// Display color for the render sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paint {
    pub color: String,
}
