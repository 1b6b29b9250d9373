//! Cleanup system: despawns destroyed enemies and clears the shells of
//! fallen players.

use hecs::{Entity, World};

use tankbattle_core::components::{Armament, Hull};

/// Remove enemies at zero health (their shells go with them) and drop them
/// from the engine's enemy list. Players stay in the world so their score
/// remains visible; only their in-flight shells are cleared.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(
    world: &mut World,
    enemies: &mut Vec<Entity>,
    players: &[Entity],
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for &enemy in enemies.iter() {
        let destroyed = world
            .get::<&Hull>(enemy)
            .map(|hull| hull.health <= 0.0)
            .unwrap_or(true);
        if destroyed {
            despawn_buffer.push(enemy);
        }
    }

    if !despawn_buffer.is_empty() {
        enemies.retain(|e| !despawn_buffer.contains(e));
    }

    for &player in players {
        if let Ok((hull, armament)) = world.query_one_mut::<(&Hull, &mut Armament)>(player) {
            if hull.health <= 0.0 {
                armament.projectiles.clear();
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
