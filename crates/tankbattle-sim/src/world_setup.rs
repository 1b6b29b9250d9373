//! Entity spawn factories for setting up the simulation world.
//!
//! Creates player and enemy tanks with their component bundles.

use glam::DVec2;
use hecs::{Entity, World};

use tankbattle_core::components::*;
use tankbattle_core::config::Tuning;
use tankbattle_core::constants::{player_color, ENEMY_COLOR, MAX_HEALTH};
use tankbattle_core::input::KeyBindings;
use tankbattle_core::types::Playfield;

/// Spawn both players: slot 0 near the left edge, slot 1 near the right,
/// vertically centered.
pub fn setup_players(
    world: &mut World,
    playfield: &Playfield,
    bindings: &[KeyBindings; 2],
    tuning: &Tuning,
) -> [Entity; 2] {
    let y = playfield.height / 2.0;
    let left = DVec2::new(tuning.player_spawn_inset, y);
    let right = DVec2::new(playfield.width - tuning.player_spawn_inset, y);
    [
        spawn_player(world, 0, left, bindings[0], tuning),
        spawn_player(world, 1, right, bindings[1], tuning),
    ]
}

/// Spawn a player tank at `position`, facing north.
pub fn spawn_player(
    world: &mut World,
    slot: u8,
    position: DVec2,
    bindings: KeyBindings,
    tuning: &Tuning,
) -> Entity {
    world.spawn((
        Pilot { slot, score: 0 },
        Controller::Player(bindings),
        Transform {
            position,
            heading: 0.0,
        },
        default_motion(tuning),
        default_hull(tuning),
        default_armament(tuning),
        Paint {
            color: player_color(slot).to_string(),
        },
    ))
}

/// Spawn an AI tank at `position` with zero speed and heading.
pub fn spawn_enemy(world: &mut World, position: DVec2, tuning: &Tuning) -> Entity {
    world.spawn((
        Controller::Ai,
        Transform {
            position,
            heading: 0.0,
        },
        default_motion(tuning),
        default_hull(tuning),
        default_armament(tuning),
        Paint {
            color: ENEMY_COLOR.to_string(),
        },
    ))
}

fn default_motion(tuning: &Tuning) -> Motion {
    Motion {
        speed: 0.0,
        max_speed: tuning.max_speed,
        rotation_rate_deg: tuning.rotation_rate_deg,
    }
}

fn default_hull(tuning: &Tuning) -> Hull {
    Hull {
        health: MAX_HEALTH,
        footprint: tuning.footprint,
    }
}

/// A fresh gun starts loaded: the reload timer is already satisfied.
fn default_armament(tuning: &Tuning) -> Armament {
    Armament {
        weapon: WeaponStats {
            damage: tuning.projectile_damage,
            projectile_speed: tuning.projectile_speed,
            reload_ms: tuning.reload_ms,
            max_range: tuning.projectile_max_range,
        },
        since_last_fire_ms: tuning.reload_ms,
        projectiles: Vec::with_capacity(tuning.max_in_flight),
    }
}
