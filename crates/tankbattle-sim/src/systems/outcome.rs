//! Terminal-condition checks.

use hecs::{Entity, World};

use tankbattle_core::components::{Hull, Pilot};
use tankbattle_core::enums::{MatchMode, MatchOutcome};

/// Evaluate whether the match is over.
///
/// PvP ends when either player is down; player 1 is checked first, so a
/// simultaneous knockout goes to player 2. Co-op ends when every player is
/// down, with the sum of all scores as the final score.
pub fn evaluate(
    world: &World,
    mode: MatchMode,
    players: &[Entity],
    wave: u32,
) -> Option<MatchOutcome> {
    let is_down = |entity: Entity| {
        world
            .get::<&Hull>(entity)
            .map(|hull| hull.health <= 0.0)
            .unwrap_or(true)
    };

    match mode {
        MatchMode::Pvp => {
            let [first, second] = players else {
                return None;
            };
            if is_down(*first) {
                Some(MatchOutcome::Victory {
                    winner_slot: 1,
                    loser_slot: 0,
                })
            } else if is_down(*second) {
                Some(MatchOutcome::Victory {
                    winner_slot: 0,
                    loser_slot: 1,
                })
            } else {
                None
            }
        }
        MatchMode::Coop => {
            if players.iter().all(|&p| is_down(p)) {
                Some(MatchOutcome::GameOver {
                    wave,
                    final_score: total_score(world, players),
                })
            } else {
                None
            }
        }
        MatchMode::Menu | MatchMode::Upgrade => None,
    }
}

/// Sum of the scores of `players`.
pub fn total_score(world: &World, players: &[Entity]) -> u32 {
    players
        .iter()
        .filter_map(|&p| world.get::<&Pilot>(p).ok().map(|pilot| pilot.score))
        .sum()
}
