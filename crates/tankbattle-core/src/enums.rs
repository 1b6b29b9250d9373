//! Enumeration types used throughout the simulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level match mode (finite state machine, initial = `Menu`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchMode {
    /// Mode selection screen.
    #[default]
    Menu,
    /// Player versus player, no enemies.
    Pvp,
    /// Both players against AI waves.
    Coop,
    /// Between-wave upgrade selection.
    Upgrade,
}

impl MatchMode {
    /// Whether the simulation steps combatants in this mode.
    pub fn is_playing(self) -> bool {
        matches!(self, MatchMode::Pvp | MatchMode::Coop)
    }
}

/// Between-wave upgrade applied to every living player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    /// +damage per projectile (unbounded).
    Damage,
    /// +max speed (unbounded).
    Speed,
    /// -reload cooldown, floored.
    Reload,
    /// +health, capped at max health.
    Health,
}

impl UpgradeKind {
    /// The full upgrade catalogue in presentation order.
    pub const ALL: [UpgradeKind; 4] = [
        UpgradeKind::Damage,
        UpgradeKind::Speed,
        UpgradeKind::Reload,
        UpgradeKind::Health,
    ];

    /// Label shown on the upgrade screen.
    pub fn label(self) -> &'static str {
        match self {
            UpgradeKind::Damage => "Increased Damage",
            UpgradeKind::Speed => "Faster Movement",
            UpgradeKind::Reload => "Faster Reload",
            UpgradeKind::Health => "Health Restore",
        }
    }

    fn name(self) -> &'static str {
        match self {
            UpgradeKind::Damage => "damage",
            UpgradeKind::Speed => "speed",
            UpgradeKind::Reload => "reload",
            UpgradeKind::Health => "health",
        }
    }
}

impl fmt::Display for UpgradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when an upgrade name does not match any [`UpgradeKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown upgrade kind: {0:?}")]
pub struct UnknownUpgrade(pub String);

impl FromStr for UpgradeKind {
    type Err = UnknownUpgrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UpgradeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownUpgrade(s.to_string()))
    }
}

/// Terminal result of a match. Once recorded the simulation halts until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchOutcome {
    /// PvP: one player reached zero health. Slots are 0-based.
    Victory { winner_slot: u8, loser_slot: u8 },
    /// Co-op: every player reached zero health.
    GameOver { wave: u32, final_score: u32 },
}
