//! Snapshot system: reads the world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use tankbattle_core::components::*;
use tankbattle_core::constants::{ENEMY_PROJECTILE_COLOR, MAX_HEALTH, PLAYER_PROJECTILE_COLOR};
use tankbattle_core::enums::{MatchMode, MatchOutcome, UpgradeKind};
use tankbattle_core::events::GameEvent;
use tankbattle_core::state::*;
use tankbattle_core::types::{Playfield, SimTime};

/// Everything the snapshot needs besides the world itself.
pub struct SnapshotInput<'a> {
    pub time: SimTime,
    pub mode: MatchMode,
    pub wave: u32,
    pub playfield: Playfield,
    pub players: &'a [Entity],
    pub enemies: &'a [Entity],
    pub upgrade_options: &'a [UpgradeKind],
    pub outcome: Option<MatchOutcome>,
    pub events: Vec<GameEvent>,
}

/// Build a GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, input: SnapshotInput<'_>) -> GameStateSnapshot {
    let players = living_tanks(world, input.players);
    let enemies = living_tanks(world, input.enemies);

    let player_scores: Vec<u32> = input
        .players
        .iter()
        .map(|&p| world.get::<&Pilot>(p).map(|pilot| pilot.score).unwrap_or(0))
        .collect();

    let upgrade_options = if input.mode == MatchMode::Upgrade {
        build_upgrade_options(input.upgrade_options)
    } else {
        Vec::new()
    };

    GameStateSnapshot {
        time: input.time,
        mode: input.mode,
        playfield: input.playfield,
        hud: HudView {
            total_score: player_scores.iter().sum(),
            player_scores,
            wave: input.wave,
            enemies_remaining: enemies.len() as u32,
        },
        players,
        enemies,
        upgrade_options,
        outcome: input.outcome,
        events: input.events,
    }
}

/// TankViews for the living combatants in `entities`, in list order.
fn living_tanks(world: &World, entities: &[Entity]) -> Vec<TankView> {
    entities
        .iter()
        .filter_map(|&entity| tank_view(world, entity))
        .collect()
}

fn tank_view(world: &World, entity: Entity) -> Option<TankView> {
    let mut query = world
        .query_one::<(&Transform, &Hull, &Armament, &Paint, Option<&Pilot>)>(entity)
        .ok()?;
    let (transform, hull, armament, paint, pilot) = query.get()?;
    if hull.health <= 0.0 {
        return None;
    }

    Some(TankView {
        id: entity.to_bits().get(),
        slot: pilot.map(|p| p.slot),
        position: transform.position,
        heading: transform.heading,
        footprint: hull.footprint,
        color: paint.color.clone(),
        health: hull.health,
        health_fraction: hull.health / MAX_HEALTH,
        projectiles: armament
            .projectiles
            .iter()
            .filter(|p| p.active)
            .map(|p| ProjectileView {
                position: p.position,
                heading: p.heading,
                player_owned: p.player_owned,
                color: if p.player_owned {
                    PLAYER_PROJECTILE_COLOR
                } else {
                    ENEMY_PROJECTILE_COLOR
                }
                .to_string(),
            })
            .collect(),
    })
}

fn build_upgrade_options(options: &[UpgradeKind]) -> Vec<UpgradeOptionView> {
    options
        .iter()
        .enumerate()
        .map(|(index, kind)| UpgradeOptionView {
            number: index as u8 + 1,
            kind: *kind,
            label: kind.label().to_string(),
        })
        .collect()
}
