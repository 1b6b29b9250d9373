//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tankbattle_core::commands::PlayerCommand;
use tankbattle_core::input::HostEvent;
use tankbattle_core::state::GameStateSnapshot;

/// Messages sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Keyboard or resize event from the host environment.
    Host(HostEvent),
    /// A discrete command forwarded to the engine as-is.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`. The
/// latest snapshot is an `Arc` shared with the game loop thread.
pub struct AppState {
    /// `None` until the simulation is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub running: Mutex<bool>,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
        assert!(state.loop_thread.lock().unwrap().is_none());
    }
}
