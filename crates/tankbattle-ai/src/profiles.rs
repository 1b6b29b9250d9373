//! Behavioral profile for AI-controlled tanks.

use tankbattle_core::config::Tuning;

/// Parameters consumed by [`crate::steering::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiProfile {
    /// Throttle step per frame toward or away from the target.
    pub acceleration: f64,
    /// Speed multiplier applied every frame regardless of throttle.
    pub friction: f64,
    /// Close in while farther than this.
    pub approach_distance: f64,
    /// Back off while nearer than this.
    pub retreat_distance: f64,
    /// Aim error (radians) under which firing is considered.
    pub aim_tolerance: f64,
    /// Per-frame firing probability once aimed.
    pub fire_chance: f64,
}

impl AiProfile {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            acceleration: tuning.ai_acceleration,
            friction: tuning.ai_friction,
            approach_distance: tuning.ai_approach_distance,
            retreat_distance: tuning.ai_retreat_distance,
            aim_tolerance: tuning.ai_aim_tolerance,
            fire_chance: tuning.ai_fire_chance.clamp(0.0, 1.0),
        }
    }
}

impl Default for AiProfile {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}
