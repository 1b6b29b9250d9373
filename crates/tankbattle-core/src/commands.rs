//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next frame boundary. Invalid
//! commands (wrong mode, out-of-range index, dead shooter) are ignored.

use serde::{Deserialize, Serialize};

use crate::enums::MatchMode;

/// All discrete (edge-triggered) player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the menu for `Pvp` or `Coop`.
    SelectMode { mode: MatchMode },
    /// Pick an upgrade by 0-based index into the offered options.
    ChooseUpgrade { index: usize },
    /// Fire the main gun of the player in `slot` (0-based).
    Fire { slot: u8 },
    /// Reset to the menu after a match has ended.
    Restart,
}
