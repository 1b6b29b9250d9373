//! Simulation engine: the match director.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, drives the mode state machine and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankbattle_ai::profiles::AiProfile;
use tankbattle_core::commands::PlayerCommand;
use tankbattle_core::components::{Armament, Hull, Motion, Transform};
use tankbattle_core::config::Tuning;
use tankbattle_core::enums::{MatchMode, MatchOutcome, UpgradeKind};
use tankbattle_core::events::GameEvent;
use tankbattle_core::input::{translate_key_down, InputState, Key, KeyBindings};
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_core::types::{Playfield, SimTime};

use crate::combatant;
use crate::systems;
use crate::systems::control::ControlContext;
use crate::systems::snapshot::SnapshotInput;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial playfield bounds.
    pub playfield: Playfield,
    pub tuning: Tuning,
    /// Key bindings for player slots 0 and 1.
    pub bindings: [KeyBindings; 2],
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            playfield: Playfield::default(),
            tuning: Tuning::default(),
            bindings: KeyBindings::defaults(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    mode: MatchMode,
    wave: u32,
    rng: ChaCha8Rng,
    tuning: Tuning,
    ai_profile: AiProfile,
    bindings: [KeyBindings; 2],
    playfield: Playfield,
    players: [Entity; 2],
    enemies: Vec<Entity>,
    upgrade_options: Vec<UpgradeKind>,
    outcome: Option<MatchOutcome>,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine in `Menu` mode with both players spawned.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let players = world_setup::setup_players(
            &mut world,
            &config.playfield,
            &config.bindings,
            &config.tuning,
        );

        Self {
            world,
            time: SimTime::default(),
            mode: MatchMode::Menu,
            wave: 1,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ai_profile: AiProfile::from_tuning(&config.tuning),
            tuning: config.tuning,
            bindings: config.bindings,
            playfield: config.playfield,
            players,
            enemies: Vec::new(),
            upgrade_options: Vec::new(),
            outcome: None,
            input: InputState::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Record a key press: mark it held and queue whatever discrete commands
    /// it triggers in the current mode. Character keys are case-folded.
    pub fn key_down(&mut self, key: Key) {
        let key = key.normalized();
        self.input.press(key);
        let commands = translate_key_down(self.mode, key, &self.bindings);
        self.queue_commands(commands);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key.normalized());
    }

    /// Replace the playfield bounds. Takes effect on the next frame.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.playfield = Playfield::new(width, height);
    }

    /// Advance the simulation by one frame and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.mode.is_playing() && self.outcome.is_none() {
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInput {
                time: self.time,
                mode: self.mode,
                wave: self.wave,
                playfield: self.playfield,
                players: &self.players,
                enemies: &self.enemies,
                upgrade_options: &self.upgrade_options,
                outcome: self.outcome,
                events,
            },
        )
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Current co-op wave number (starts at 1).
    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn playfield(&self) -> Playfield {
        self.playfield
    }

    /// Upgrades on offer while in `Upgrade` mode.
    pub fn upgrade_options(&self) -> &[UpgradeKind] {
        &self.upgrade_options
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Player entities, indexed by slot.
    pub fn players(&self) -> [Entity; 2] {
        self.players
    }

    /// Living enemy entities in spawn order.
    #[cfg(test)]
    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    /// Mutable world access for tests that stage positions and health.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that do not apply in the
    /// current state are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectMode { mode } => {
                if self.mode != MatchMode::Menu {
                    return;
                }
                match mode {
                    MatchMode::Pvp => self.set_mode(MatchMode::Pvp),
                    MatchMode::Coop => {
                        self.set_mode(MatchMode::Coop);
                        self.spawn_wave();
                    }
                    other => log::debug!("ignoring mode selection {other:?}"),
                }
            }
            PlayerCommand::ChooseUpgrade { index } => {
                if self.mode != MatchMode::Upgrade {
                    return;
                }
                let Some(&kind) = self.upgrade_options.get(index) else {
                    log::debug!(
                        "upgrade index {index} out of range ({} offered)",
                        self.upgrade_options.len()
                    );
                    return;
                };
                self.apply_upgrade(kind);
                self.upgrade_options.clear();
                self.wave += 1;
                self.set_mode(MatchMode::Coop);
                self.spawn_wave();
            }
            PlayerCommand::Fire { slot } => {
                if !self.mode.is_playing() || self.outcome.is_some() {
                    return;
                }
                let Some(&entity) = self.players.get(slot as usize) else {
                    return;
                };
                self.fire_player(entity, slot);
            }
            PlayerCommand::Restart => {
                if self.outcome.is_none() {
                    log::debug!("restart ignored: match still running");
                    return;
                }
                self.restart();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        self.time.advance(self.tuning.frame_ms);
        systems::control::advance_cooldowns(&mut self.world, self.tuning.frame_ms);

        // 1. Players
        let ctx = ControlContext {
            input: &self.input,
            targets: &[],
            ai_profile: &self.ai_profile,
            playfield: &self.playfield,
            tuning: &self.tuning,
        };
        systems::control::run(
            &mut self.world,
            &self.players,
            &ctx,
            &mut self.rng,
            &mut self.events,
        );

        match self.mode {
            MatchMode::Coop => {
                // 2. Enemies chase whichever living player is nearest
                let targets = systems::control::living_positions(&self.world, &self.players);
                let ctx = ControlContext {
                    targets: &targets,
                    ..ctx
                };
                systems::control::run(
                    &mut self.world,
                    &self.enemies,
                    &ctx,
                    &mut self.rng,
                    &mut self.events,
                );

                // 3. Collisions between opposing sides
                let award = self.tuning.kill_award;
                systems::collision::run(
                    &mut self.world,
                    &self.players,
                    &self.enemies,
                    award,
                    &mut self.events,
                );
                systems::collision::run(
                    &mut self.world,
                    &self.enemies,
                    &self.players,
                    award,
                    &mut self.events,
                );
            }
            MatchMode::Pvp => {
                let [first, second] = self.players;
                let award = self.tuning.kill_award;
                systems::collision::run(
                    &mut self.world,
                    &[first],
                    &[second],
                    award,
                    &mut self.events,
                );
                systems::collision::run(
                    &mut self.world,
                    &[second],
                    &[first],
                    award,
                    &mut self.events,
                );
            }
            MatchMode::Menu | MatchMode::Upgrade => {}
        }

        // 4. Cleanup
        systems::cleanup::run(
            &mut self.world,
            &mut self.enemies,
            &self.players,
            &mut self.despawn_buffer,
        );

        // 5. Wave clear
        if self.mode == MatchMode::Coop && self.enemies.is_empty() {
            self.upgrade_options =
                systems::waves::offer_upgrades(&mut self.rng, self.tuning.upgrade_options_offered);
            log::info!("wave {} cleared", self.wave);
            self.events.push(GameEvent::WaveCleared { wave: self.wave });
            self.set_mode(MatchMode::Upgrade);
        }

        // 6. Terminal conditions
        if let Some(outcome) =
            systems::outcome::evaluate(&self.world, self.mode, &self.players, self.wave)
        {
            log::info!("match ended: {outcome:?}");
            self.outcome = Some(outcome);
            self.events.push(GameEvent::MatchEnded { outcome });
        }
    }

    fn set_mode(&mut self, to: MatchMode) {
        if self.mode == to {
            return;
        }
        log::info!("mode {:?} -> {:?}", self.mode, to);
        self.events.push(GameEvent::ModeChanged {
            from: self.mode,
            to,
        });
        self.mode = to;
    }

    fn spawn_wave(&mut self) {
        let spawned = systems::waves::spawn_wave(
            &mut self.world,
            &mut self.rng,
            self.wave,
            &self.playfield,
            &self.tuning,
        );
        log::info!("wave {} spawned with {} enemies", self.wave, spawned.len());
        self.events.push(GameEvent::WaveSpawned {
            wave: self.wave,
            enemies: spawned.len() as u32,
        });
        self.enemies.extend(spawned);
    }

    /// Apply `kind` to every living player.
    fn apply_upgrade(&mut self, kind: UpgradeKind) {
        for &player in &self.players {
            let Ok((motion, hull, armament)) = self
                .world
                .query_one_mut::<(&mut Motion, &mut Hull, &mut Armament)>(player)
            else {
                continue;
            };
            if hull.health <= 0.0 {
                continue;
            }
            combatant::apply_upgrade(kind, motion, hull, armament, &self.tuning);
        }
        log::info!("upgrade applied: {}", kind.label());
        self.events.push(GameEvent::UpgradeApplied { kind });
    }

    fn fire_player(&mut self, entity: Entity, slot: u8) {
        let Ok((transform, hull, armament)) = self
            .world
            .query_one_mut::<(&Transform, &Hull, &mut Armament)>(entity)
        else {
            return;
        };
        if hull.health <= 0.0 {
            return;
        }
        if let Some(position) = combatant::fire(transform, hull, armament, true, &self.tuning) {
            self.events.push(GameEvent::ShotFired {
                slot: Some(slot),
                position,
            });
        }
    }

    /// Back to a fresh menu: new players, no enemies, wave 1, time zero.
    fn restart(&mut self) {
        log::info!("restarting match");
        self.world.clear();
        self.players = world_setup::setup_players(
            &mut self.world,
            &self.playfield,
            &self.bindings,
            &self.tuning,
        );
        self.enemies.clear();
        self.upgrade_options.clear();
        self.outcome = None;
        self.wave = 1;
        self.time = SimTime::default();
        self.input.clear();
        self.set_mode(MatchMode::Menu);
    }
}
