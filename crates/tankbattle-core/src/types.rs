//! Fundamental geometric and simulation types.
//!
//! Screen coordinates: x grows to the right, y grows downward.
//! Headings are radians with 0 pointing north (screen-up), clockwise positive.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLAYFIELD_HEIGHT, DEFAULT_PLAYFIELD_WIDTH};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each simulated frame).
    pub frame: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one frame of `frame_ms` milliseconds.
    pub fn advance(&mut self, frame_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += frame_ms;
    }
}

/// Playfield bounds. Only changes between frames (host resize).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f64,
    pub height: f64,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_PLAYFIELD_WIDTH,
            height: DEFAULT_PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies within `[0, width] x [0, height]` (edges inclusive).
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Clamp a point so that a square of half-size `half_extent` centered on it
    /// stays inside the playfield. On a playfield narrower than the square the
    /// lower bound wins.
    pub fn clamp_inside(&self, point: DVec2, half_extent: f64) -> DVec2 {
        DVec2::new(
            (self.width - half_extent).min(point.x).max(half_extent),
            (self.height - half_extent).min(point.y).max(half_extent),
        )
    }
}

/// Per-frame decision produced by a combatant's controller: how much to turn,
/// the new scalar speed, and whether to pull the trigger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Steering {
    /// Heading change this frame (radians, clockwise positive).
    pub heading_delta: f64,
    /// Scalar speed after this frame's throttle and friction (units/frame).
    pub speed: f64,
    /// Request a shot this frame (still subject to cooldown and in-flight cap).
    pub fire: bool,
}

/// Unit vector for a heading (0 = north, clockwise).
pub fn heading_vector(heading: f64) -> DVec2 {
    DVec2::new(heading.sin(), -heading.cos())
}

/// Heading that points from `from` toward `to`.
pub fn bearing(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    d.x.atan2(-d.y)
}

/// Wrap an angle difference into `(-PI, PI]`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + 3.0 * PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
