//! Fixed simulation constants. Tunable gameplay values live in [`crate::config::Tuning`].

/// Visual frame rate the simulation is stepped at (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per frame at `TICK_RATE`.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Health ceiling for every combatant.
pub const MAX_HEALTH: f64 = 100.0;

// --- Playfield ---

pub const DEFAULT_PLAYFIELD_WIDTH: f64 = 1280.0;
pub const DEFAULT_PLAYFIELD_HEIGHT: f64 = 720.0;

// --- Render sink colors ---

pub const PLAYER_ONE_COLOR: &str = "#2196F3";
pub const PLAYER_TWO_COLOR: &str = "#FF5722";
pub const ENEMY_COLOR: &str = "#E91E63";
pub const PLAYER_PROJECTILE_COLOR: &str = "#333";
pub const ENEMY_PROJECTILE_COLOR: &str = "#f44336";

/// Color for a player slot (0 or 1).
pub fn player_color(slot: u8) -> &'static str {
    if slot == 0 {
        PLAYER_ONE_COLOR
    } else {
        PLAYER_TWO_COLOR
    }
}
