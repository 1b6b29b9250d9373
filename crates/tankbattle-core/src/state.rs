//! Game state snapshot: everything the render sink needs after each frame.
//!
//! The core places no formatting requirements on the sink beyond these
//! numeric and string values.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{MatchMode, MatchOutcome, UpgradeKind};
use crate::events::GameEvent;
use crate::types::{Playfield, SimTime};

/// Complete visible state produced by every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub mode: MatchMode,
    pub playfield: Playfield,
    /// Living players, ordered by slot.
    pub players: Vec<TankView>,
    /// Living enemies in spawn order.
    pub enemies: Vec<TankView>,
    pub hud: HudView,
    /// Non-empty only in `Upgrade` mode.
    pub upgrade_options: Vec<UpgradeOptionView>,
    /// Set once the match is over (overlay).
    pub outcome: Option<MatchOutcome>,
    /// Events raised since the previous snapshot.
    pub events: Vec<GameEvent>,
}

/// A drawable tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankView {
    /// Stable entity identifier.
    pub id: u64,
    /// Player slot, `None` for enemies.
    pub slot: Option<u8>,
    pub position: DVec2,
    pub heading: f64,
    pub footprint: f64,
    pub color: String,
    pub health: f64,
    /// `health / MAX_HEALTH`, for the health bar.
    pub health_fraction: f64,
    pub projectiles: Vec<ProjectileView>,
}

/// A drawable shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub heading: f64,
    pub player_owned: bool,
    pub color: String,
}

/// HUD text values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    /// Score per player slot.
    pub player_scores: Vec<u32>,
    pub wave: u32,
    pub enemies_remaining: u32,
    /// Sum of all player scores.
    pub total_score: u32,
}

/// One line of the upgrade screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeOptionView {
    /// 1-based number the player presses.
    pub number: u8,
    pub kind: UpgradeKind,
    pub label: String,
}
