//! Gameplay tuning.
//!
//! Every value has a default matching the classic arcade feel. A JSON file may
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::constants::FRAME_MS;

/// Tunable gameplay parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulated milliseconds per frame (drives cooldown timers).
    pub frame_ms: f64,

    // --- Tanks ---
    /// Side length of the square tank footprint.
    pub footprint: f64,
    /// Turn rate in degrees per frame.
    pub rotation_rate_deg: f64,
    pub max_speed: f64,
    /// Player throttle step per frame.
    pub player_acceleration: f64,
    /// Player speed multiplier per frame without throttle input.
    pub player_idle_friction: f64,
    /// Distance from the side edges at which players spawn.
    pub player_spawn_inset: f64,

    // --- Weapons ---
    pub projectile_damage: f64,
    pub projectile_speed: f64,
    pub projectile_max_range: f64,
    pub reload_ms: f64,
    /// Maximum shells a combatant can have in flight.
    pub max_in_flight: usize,

    // --- AI ---
    pub ai_acceleration: f64,
    /// AI speed multiplier applied every frame.
    pub ai_friction: f64,
    /// Close in when farther than this.
    pub ai_approach_distance: f64,
    /// Back off when nearer than this.
    pub ai_retreat_distance: f64,
    /// Maximum aim error (radians) at which the AI considers firing.
    pub ai_aim_tolerance: f64,
    /// Per-frame probability of firing once aimed.
    pub ai_fire_chance: f64,

    // --- Waves and scoring ---
    pub wave_base_enemies: u32,
    /// Enemies spawn this far outside the top or bottom edge.
    pub enemy_spawn_offset: f64,
    pub kill_award: u32,
    pub upgrade_options_offered: usize,

    // --- Upgrades ---
    pub upgrade_damage_bonus: f64,
    pub upgrade_speed_bonus: f64,
    pub upgrade_reload_reduction_ms: f64,
    pub min_reload_ms: f64,
    pub upgrade_health_bonus: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_ms: FRAME_MS,
            footprint: 40.0,
            rotation_rate_deg: 3.0,
            max_speed: 5.0,
            player_acceleration: 0.2,
            player_idle_friction: 0.95,
            player_spawn_inset: 100.0,
            projectile_damage: 10.0,
            projectile_speed: 10.0,
            projectile_max_range: 500.0,
            reload_ms: 500.0,
            max_in_flight: 5,
            ai_acceleration: 0.1,
            ai_friction: 0.98,
            ai_approach_distance: 200.0,
            ai_retreat_distance: 150.0,
            ai_aim_tolerance: 0.1,
            ai_fire_chance: 0.05,
            wave_base_enemies: 3,
            enemy_spawn_offset: 50.0,
            kill_award: 100,
            upgrade_options_offered: 3,
            upgrade_damage_bonus: 5.0,
            upgrade_speed_bonus: 1.0,
            upgrade_reload_reduction_ms: 50.0,
            min_reload_ms: 100.0,
            upgrade_health_bonus: 30.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
