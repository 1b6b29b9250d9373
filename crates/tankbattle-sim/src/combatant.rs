//! Combatant operations: movement integration, firing, projectile upkeep,
//! damage and upgrades.
//!
//! These work on component references so both the per-frame systems and the
//! command handlers can use them without going through the ECS.

use glam::DVec2;

use tankbattle_core::components::{Armament, Hull, Motion, Projectile, Transform};
use tankbattle_core::config::Tuning;
use tankbattle_core::constants::MAX_HEALTH;
use tankbattle_core::enums::UpgradeKind;
use tankbattle_core::input::{InputState, KeyBindings};
use tankbattle_core::types::{heading_vector, Playfield, Steering};

/// Player strategy: throttle and turn keys are level-triggered.
///
/// Forward wins over backward; with neither held the tank coasts down by the
/// idle friction factor.
pub fn player_steering(
    bindings: &KeyBindings,
    input: &InputState,
    motion: &Motion,
    tuning: &Tuning,
) -> Steering {
    let speed = if input.is_held(bindings.forward) {
        (motion.speed + tuning.player_acceleration).min(motion.max_speed)
    } else if input.is_held(bindings.backward) {
        (motion.speed - tuning.player_acceleration).max(-motion.max_speed)
    } else {
        motion.speed * tuning.player_idle_friction
    };

    let step = motion.rotation_rate_deg.to_radians();
    let mut heading_delta = 0.0;
    if input.is_held(bindings.left) {
        heading_delta -= step;
    }
    if input.is_held(bindings.right) {
        heading_delta += step;
    }

    Steering {
        heading_delta,
        speed,
        fire: false,
    }
}

/// Apply this frame's turn. Runs before any shot so shells leave on the
/// turned heading.
pub fn turn(transform: &mut Transform, steering: &Steering) {
    transform.heading += steering.heading_delta;
}

/// Take the steering speed, move along the current heading and keep the
/// footprint inside the playfield. The turn is applied separately by [`turn`].
pub fn integrate(
    transform: &mut Transform,
    motion: &mut Motion,
    hull: &Hull,
    steering: &Steering,
    playfield: &Playfield,
) {
    motion.speed = steering.speed;
    let moved = transform.position + heading_vector(transform.heading) * motion.speed;
    transform.position = playfield.clamp_inside(moved, hull.footprint / 2.0);
}

/// Advance the reload timer by `elapsed_ms` of simulated time.
pub fn advance_cooldown(armament: &mut Armament, elapsed_ms: f64) {
    armament.since_last_fire_ms += elapsed_ms;
}

/// Whether the gun may fire right now.
pub fn can_fire(armament: &Armament, tuning: &Tuning) -> bool {
    armament.since_last_fire_ms >= armament.weapon.reload_ms
        && armament.projectiles.len() < tuning.max_in_flight
}

/// Fire one shell from the front edge of the tank.
///
/// No-op while reloading or with the in-flight cap reached. Returns the muzzle
/// position when a shell was spawned.
pub fn fire(
    transform: &Transform,
    hull: &Hull,
    armament: &mut Armament,
    player_owned: bool,
    tuning: &Tuning,
) -> Option<DVec2> {
    if !can_fire(armament, tuning) {
        return None;
    }

    let muzzle = transform.position + heading_vector(transform.heading) * (hull.footprint / 2.0);
    armament.projectiles.push(Projectile {
        position: muzzle,
        heading: transform.heading,
        speed: armament.weapon.projectile_speed,
        damage: armament.weapon.damage,
        traveled: 0.0,
        max_range: armament.weapon.max_range,
        player_owned,
        active: true,
    });
    armament.since_last_fire_ms = 0.0;
    Some(muzzle)
}

/// Move a shell one frame and retire it once past its range or off the field.
pub fn advance_projectile(projectile: &mut Projectile, playfield: &Playfield) {
    projectile.position += heading_vector(projectile.heading) * projectile.speed;
    projectile.traveled += projectile.speed;

    if projectile.traveled > projectile.max_range || !playfield.contains(projectile.position) {
        projectile.active = false;
    }
}

/// Drop retired shells, then advance the rest.
pub fn update_projectiles(armament: &mut Armament, playfield: &Playfield) {
    armament.projectiles.retain(|p| p.active);
    for projectile in &mut armament.projectiles {
        advance_projectile(projectile, playfield);
    }
}

/// Subtract `amount` from health, never going below zero.
/// Returns true only for the hit that takes health from positive to zero.
pub fn damage(hull: &mut Hull, amount: f64) -> bool {
    let was_alive = hull.health > 0.0;
    hull.health = (hull.health - amount).clamp(0.0, MAX_HEALTH);
    was_alive && hull.health <= 0.0
}

/// Apply one upgrade step.
pub fn apply_upgrade(
    kind: UpgradeKind,
    motion: &mut Motion,
    hull: &mut Hull,
    armament: &mut Armament,
    tuning: &Tuning,
) {
    match kind {
        UpgradeKind::Damage => armament.weapon.damage += tuning.upgrade_damage_bonus,
        UpgradeKind::Speed => motion.max_speed += tuning.upgrade_speed_bonus,
        UpgradeKind::Reload => {
            armament.weapon.reload_ms = (armament.weapon.reload_ms
                - tuning.upgrade_reload_reduction_ms)
                .max(tuning.min_reload_ms);
        }
        UpgradeKind::Health => {
            hull.health = (hull.health + tuning.upgrade_health_bonus).min(MAX_HEALTH);
        }
    }
}

/// Apply an upgrade by name. Unknown names are ignored.
pub fn apply_upgrade_named(
    name: &str,
    motion: &mut Motion,
    hull: &mut Hull,
    armament: &mut Armament,
    tuning: &Tuning,
) {
    if let Ok(kind) = name.parse::<UpgradeKind>() {
        apply_upgrade(kind, motion, hull, armament, tuning);
    }
}
