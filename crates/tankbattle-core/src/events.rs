//! Events emitted by the simulation for sound and UI feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{MatchMode, MatchOutcome, UpgradeKind};

/// Something noteworthy that happened during a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The match mode changed.
    ModeChanged { from: MatchMode, to: MatchMode },
    /// A combatant fired. `slot` is set for players.
    ShotFired { slot: Option<u8>, position: DVec2 },
    /// A projectile struck a combatant.
    ProjectileHit {
        position: DVec2,
        damage: f64,
        player_owned: bool,
    },
    /// A combatant's health crossed to zero. `credited_slot` is the player
    /// whose projectile landed the killing hit, if any.
    CombatantDestroyed {
        position: DVec2,
        credited_slot: Option<u8>,
        award: u32,
    },
    /// A co-op wave entered the playfield.
    WaveSpawned { wave: u32, enemies: u32 },
    /// Every enemy of a wave was destroyed.
    WaveCleared { wave: u32 },
    /// An upgrade was applied to the living players.
    UpgradeApplied { kind: UpgradeKind },
    /// The match reached a terminal outcome.
    MatchEnded { outcome: MatchOutcome },
}
