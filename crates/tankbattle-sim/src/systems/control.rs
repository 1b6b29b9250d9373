//! Control system: asks each combatant's controller for a decision, then
//! moves the tank and its shells.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use tankbattle_core::components::{Armament, Controller, Hull, Motion, Pilot, Transform};
use tankbattle_core::config::Tuning;
use tankbattle_core::events::GameEvent;
use tankbattle_core::input::InputState;
use tankbattle_core::types::Playfield;

use tankbattle_ai::profiles::AiProfile;
use tankbattle_ai::steering::{self, AiContext};

use crate::combatant;

/// Read-only inputs shared by every controller this frame.
pub struct ControlContext<'a> {
    pub input: &'a InputState,
    /// Positions of living players, for AI targeting.
    pub targets: &'a [DVec2],
    pub ai_profile: &'a AiProfile,
    pub playfield: &'a Playfield,
    pub tuning: &'a Tuning,
}

/// Components one controller step reads and writes.
type ControlQuery<'a> = (
    &'a Controller,
    Option<&'a Pilot>,
    &'a mut Transform,
    &'a mut Motion,
    &'a Hull,
    &'a mut Armament,
);

/// Update every living combatant in `entities`, in order.
///
/// Per combatant: controller decision, turn, optional shot, movement with
/// clamping, then projectile upkeep (prune retired, advance the rest).
pub fn run(
    world: &mut World,
    entities: &[Entity],
    ctx: &ControlContext<'_>,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    for &entity in entities {
        let query = world.query_one_mut::<ControlQuery<'_>>(entity);
        let Ok((controller, pilot, transform, motion, hull, armament)) = query else {
            continue;
        };

        if hull.health <= 0.0 {
            continue;
        }

        let steering = match controller {
            Controller::Player(bindings) => {
                combatant::player_steering(bindings, ctx.input, motion, ctx.tuning)
            }
            Controller::Ai => {
                let ai_ctx = AiContext {
                    position: transform.position,
                    heading: transform.heading,
                    speed: motion.speed,
                    max_speed: motion.max_speed,
                    rotation_rate_deg: motion.rotation_rate_deg,
                    targets: ctx.targets,
                };
                steering::evaluate(&ai_ctx, ctx.ai_profile, rng)
            }
        };

        combatant::turn(transform, &steering);

        if steering.fire {
            let player_owned = pilot.is_some();
            if let Some(position) =
                combatant::fire(transform, hull, armament, player_owned, ctx.tuning)
            {
                events.push(GameEvent::ShotFired {
                    slot: pilot.map(|p| p.slot),
                    position,
                });
            }
        }

        combatant::integrate(transform, motion, hull, &steering, ctx.playfield);
        combatant::update_projectiles(armament, ctx.playfield);
    }
}

/// Advance every combatant's reload timer by one frame.
pub fn advance_cooldowns(world: &mut World, elapsed_ms: f64) {
    for (_entity, armament) in world.query_mut::<&mut Armament>() {
        combatant::advance_cooldown(armament, elapsed_ms);
    }
}

/// Positions of the living combatants in `entities`, in order.
pub fn living_positions(world: &World, entities: &[Entity]) -> Vec<DVec2> {
    entities
        .iter()
        .filter_map(|&entity| {
            let mut query = world.query_one::<(&Transform, &Hull)>(entity).ok()?;
            let (transform, hull) = query.get()?;
            (hull.health > 0.0).then_some(transform.position)
        })
        .collect()
}
