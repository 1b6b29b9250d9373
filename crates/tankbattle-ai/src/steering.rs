//! Bang-bang steering controller for enemy tanks.
//!
//! No ECS dependency: the caller passes the tank's own kinematic state and
//! the positions of living players, and applies the returned [`Steering`].

use glam::DVec2;
use rand::Rng;

use tankbattle_core::types::{bearing, wrap_angle, Steering};

use crate::profiles::AiProfile;

/// Input to the controller for a single enemy tank.
#[derive(Debug, Clone, Copy)]
pub struct AiContext<'a> {
    pub position: DVec2,
    pub heading: f64,
    pub speed: f64,
    pub max_speed: f64,
    pub rotation_rate_deg: f64,
    /// Positions of living players, in player order.
    pub targets: &'a [DVec2],
}

/// Index and distance of the nearest target. Ties keep the first found.
pub fn nearest_target(from: DVec2, targets: &[DVec2]) -> Option<(usize, f64)> {
    let mut nearest: Option<(usize, f64)> = None;
    for (index, target) in targets.iter().enumerate() {
        let distance = from.distance(*target);
        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((index, distance)),
        }
    }
    nearest
}

/// Compute this frame's steering.
///
/// The firing trial is only drawn once the aim error is within tolerance, so
/// the delay before a shot is geometrically distributed. Without a target the
/// tank is inert apart from friction.
pub fn evaluate<R: Rng>(ctx: &AiContext<'_>, profile: &AiProfile, rng: &mut R) -> Steering {
    let mut steering = Steering {
        heading_delta: 0.0,
        speed: ctx.speed,
        fire: false,
    };

    if let Some((index, distance)) = nearest_target(ctx.position, ctx.targets) {
        let target_heading = bearing(ctx.position, ctx.targets[index]);
        let error = wrap_angle(target_heading - ctx.heading);

        if error != 0.0 {
            steering.heading_delta = error.signum() * ctx.rotation_rate_deg.to_radians();
        }

        if distance > profile.approach_distance {
            steering.speed = (steering.speed + profile.acceleration).min(ctx.max_speed);
        } else if distance < profile.retreat_distance {
            steering.speed = (steering.speed - profile.acceleration).max(-ctx.max_speed);
        }

        steering.fire = error.abs() < profile.aim_tolerance && rng.gen_bool(profile.fire_chance);
    }

    steering.speed *= profile.friction;
    steering
}
