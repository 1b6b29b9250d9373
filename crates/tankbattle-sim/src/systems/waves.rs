//! Wave spawning and between-wave upgrade offers.

use glam::DVec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankbattle_core::config::Tuning;
use tankbattle_core::enums::UpgradeKind;
use tankbattle_core::types::Playfield;

use crate::world_setup;

/// Enemies in wave `wave`: the base count plus one per two waves.
pub fn enemy_count(wave: u32, base: u32) -> u32 {
    base + wave / 2
}

/// Spawn the enemies of `wave` just outside the top or bottom edge at random
/// x positions. Returns them in spawn order.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    playfield: &Playfield,
    tuning: &Tuning,
) -> Vec<Entity> {
    let count = enemy_count(wave, tuning.wave_base_enemies);
    (0..count)
        .map(|_| {
            let x = if playfield.width > 0.0 {
                rng.gen_range(0.0..playfield.width)
            } else {
                0.0
            };
            let y = if rng.gen_bool(0.5) {
                -tuning.enemy_spawn_offset
            } else {
                playfield.height + tuning.enemy_spawn_offset
            };
            world_setup::spawn_enemy(world, DVec2::new(x, y), tuning)
        })
        .collect()
}

/// Shuffle the upgrade catalogue and offer up to `count` distinct options.
pub fn offer_upgrades(rng: &mut ChaCha8Rng, count: usize) -> Vec<UpgradeKind> {
    let mut pool = UpgradeKind::ALL.to_vec();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}
