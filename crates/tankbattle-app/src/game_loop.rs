//! Game loop thread: runs the simulation engine at the frame rate and stores
//! snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Host events arrive via an `mpsc` channel and are applied at the
//! start of each frame; the latest snapshot is kept in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tankbattle_core::constants::TICK_RATE;
use tankbattle_core::input::HostEvent;
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_sim::engine::{SimConfig, SimulationEngine};

use crate::error::AppError;
use crate::state::GameLoopCommand;

/// Wall-clock duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tankbattle-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .map_err(AppError::Spawn)?;

    Ok((cmd_tx, handle))
}

/// Feed one channel message to the engine. Returns false on shutdown.
fn apply_command(engine: &mut SimulationEngine, command: GameLoopCommand) -> bool {
    match command {
        GameLoopCommand::Host(HostEvent::KeyDown { key }) => engine.key_down(key),
        GameLoopCommand::Host(HostEvent::KeyUp { key }) => engine.key_up(key),
        GameLoopCommand::Host(HostEvent::Resize { width, height }) => engine.resize(width, height),
        GameLoopCommand::Player(cmd) => engine.queue_command(cmd),
        GameLoopCommand::Shutdown => return false,
    }
    true
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    log::info!("game loop started (seed {})", config.seed);
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending host input
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !apply_command(&mut engine, command) {
                        log::info!("game loop shutting down");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("host disconnected, stopping game loop");
                    return;
                }
            }
        }

        // 2. Advance one frame (engine holds still in menu, upgrade and after the match)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankbattle_core::enums::MatchMode;
    use tankbattle_core::input::Key;

    #[test]
    fn test_host_events_reach_engine() {
        let mut engine = SimulationEngine::new(SimConfig::default());

        assert!(apply_command(
            &mut engine,
            GameLoopCommand::Host(HostEvent::KeyDown {
                key: Key::char('2'),
            }),
        ));
        assert!(apply_command(
            &mut engine,
            GameLoopCommand::Host(HostEvent::Resize {
                width: 640.0,
                height: 480.0,
            }),
        ));
        let snap = engine.tick();
        assert_eq!(snap.mode, MatchMode::Coop);
        assert_eq!(snap.playfield.width, 640.0);

        assert!(!apply_command(&mut engine, GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.key_down(Key::char('2'));

        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_stores_snapshots_and_stops() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();

        tx.send(GameLoopCommand::Host(HostEvent::KeyDown {
            key: Key::char('1'),
        }))
        .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.mode, MatchMode::Pvp);
        assert!(snapshot.time.frame > 0);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
