//! Collision resolver: projectiles from one side against combatants of the
//! opposing side.
//!
//! A hit is a center distance strictly below half the target's footprint
//! (the tank is treated as a circle, the shell as a point). A shell hits at
//! most one target; targets are tried in list order and the first match wins.

use glam::DVec2;
use hecs::{Entity, World};

use tankbattle_core::components::{Armament, Hull, Pilot, Transform};
use tankbattle_core::events::GameEvent;

use crate::combatant;

/// Totals from one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub hits: u32,
    pub kills: u32,
}

struct Target {
    entity: Entity,
    position: DVec2,
    footprint: f64,
}

/// Whether a shell at `shell` strikes a tank of `footprint` centered at `center`.
pub fn is_hit(shell: DVec2, center: DVec2, footprint: f64) -> bool {
    shell.distance(center) < footprint / 2.0
}

/// Resolve every active shell owned by `attackers` against the living
/// combatants in `defenders`.
///
/// Hit shells are deactivated immediately. When a hit takes a target's health
/// to zero and the shooter is a player, that player is credited `kill_award`
/// once. Combatants already at zero health are not targets.
pub fn run(
    world: &mut World,
    attackers: &[Entity],
    defenders: &[Entity],
    kill_award: u32,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    let targets: Vec<Target> = defenders
        .iter()
        .filter_map(|&entity| {
            let transform = world.get::<&Transform>(entity).ok()?;
            let hull = world.get::<&Hull>(entity).ok()?;
            (hull.health > 0.0).then(|| Target {
                entity,
                position: transform.position,
                footprint: hull.footprint,
            })
        })
        .collect();

    if targets.is_empty() {
        return report;
    }

    for &attacker in attackers {
        let credited_slot = world.get::<&Pilot>(attacker).ok().map(|p| p.slot);
        let Ok(mut armament) = world.get::<&mut Armament>(attacker) else {
            continue;
        };

        let mut kills = 0u32;
        for shell in armament.projectiles.iter_mut().filter(|p| p.active) {
            for target in &targets {
                let Ok(mut hull) = world.get::<&mut Hull>(target.entity) else {
                    continue;
                };
                if hull.health <= 0.0
                    || !is_hit(shell.position, target.position, target.footprint)
                {
                    continue;
                }

                shell.active = false;
                report.hits += 1;
                events.push(GameEvent::ProjectileHit {
                    position: shell.position,
                    damage: shell.damage,
                    player_owned: shell.player_owned,
                });

                if combatant::damage(&mut hull, shell.damage) {
                    report.kills += 1;
                    let award = if credited_slot.is_some() { kill_award } else { 0 };
                    kills += 1;
                    events.push(GameEvent::CombatantDestroyed {
                        position: target.position,
                        credited_slot,
                        award,
                    });
                    log::debug!(
                        "combatant {:?} destroyed (credited to {:?})",
                        target.entity,
                        credited_slot
                    );
                }
                break;
            }
        }
        drop(armament);

        if kills > 0 {
            if let Ok(mut pilot) = world.get::<&mut Pilot>(attacker) {
                pilot.score += kills * kill_award;
            }
        }
    }

    report
}
