//! Host-facing operations over [`AppState`].
//!
//! These bridge host requests (start, input, polling, stop) to the game loop
//! thread via its channel.

use tankbattle_core::commands::PlayerCommand;
use tankbattle_core::input::HostEvent;
use tankbattle_core::state::GameStateSnapshot;
use tankbattle_sim::engine::SimConfig;

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock()?;

    if *running {
        return Err(AppError::AlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock()? = Some(cmd_tx);
    *state.loop_thread.lock()? = Some(handle);
    *running = true;

    Ok(())
}

/// Forward a key or resize event to the simulation.
pub fn send_host_event(state: &AppState, event: HostEvent) -> Result<(), AppError> {
    send(state, GameLoopCommand::Host(event))
}

/// Send a discrete player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    send(state, GameLoopCommand::Player(command))
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock()?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state.latest_snapshot.lock()?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock()?;
    if !*running {
        return Err(AppError::NotStarted);
    }

    if let Some(tx) = state.command_tx.lock()?.take() {
        // The loop may already have exited on its own.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_thread.lock()?.take() {
        if handle.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
    *running = false;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use tankbattle_core::enums::MatchMode;
    use tankbattle_core::input::Key;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = send_command(&state, PlayerCommand::Restart).unwrap_err();
        assert!(matches!(err, AppError::NotStarted));
        assert!(matches!(stop_simulation(&state), Err(AppError::NotStarted)));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_start_send_poll_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default()),
            Err(AppError::AlreadyRunning)
        ));

        send_host_event(
            &state,
            HostEvent::KeyDown {
                key: Key::char('2'),
            },
        )
        .unwrap();
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.mode, MatchMode::Coop);
        assert_eq!(snapshot.hud.wave, 1);

        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            send_command(&state, PlayerCommand::Restart),
            Err(AppError::NotStarted)
        ));
    }
}
