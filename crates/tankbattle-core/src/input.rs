//! Keyboard input: logical keys, per-player bindings, the held-key map and
//! the translation of key-down events into discrete commands.
//!
//! The host records key presses asynchronously; the simulation only reads the
//! latest held state once per frame. Nothing is buffered or replayed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::enums::MatchMode;

/// Logical key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A printable character, stored lowercase.
    Char(char),
    Space,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl Key {
    /// Character key, case-folded so `W` and `w` are the same key.
    pub fn char(c: char) -> Self {
        Key::Char(c.to_ascii_lowercase())
    }

    /// Case-fold a character key. Keys built from untrusted input (for
    /// example deserialized host events) may carry upper-case characters.
    pub fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::char(c),
            other => other,
        }
    }

    /// Digit value for number keys.
    fn digit(self) -> Option<u32> {
        match self {
            Key::Char(c) => c.to_digit(10),
            _ => None,
        }
    }
}

/// The five logical controls of a player tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub forward: Key,
    pub backward: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl KeyBindings {
    /// W/S/A/D + Space.
    pub fn player_one() -> Self {
        Self {
            forward: Key::Char('w'),
            backward: Key::Char('s'),
            left: Key::Char('a'),
            right: Key::Char('d'),
            fire: Key::Space,
        }
    }

    /// Arrow keys + Enter.
    pub fn player_two() -> Self {
        Self {
            forward: Key::ArrowUp,
            backward: Key::ArrowDown,
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            fire: Key::Enter,
        }
    }

    /// Default bindings for both player slots.
    pub fn defaults() -> [KeyBindings; 2] {
        [Self::player_one(), Self::player_two()]
    }
}

/// Latest known "is held" state for every key.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
}

impl InputState {
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Events delivered by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostEvent {
    KeyDown { key: Key },
    KeyUp { key: Key },
    /// New playfield size, effective from the next frame.
    Resize { width: f64, height: f64 },
}

/// Translate a key-down into the discrete commands it triggers in `mode`.
///
/// Menu digits pick a mode, upgrade digits pick an option, fire keys are
/// edge-triggered shots and `r` restarts. Validation happens when the
/// commands are processed, not here.
pub fn translate_key_down(
    mode: MatchMode,
    key: Key,
    bindings: &[KeyBindings; 2],
) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();

    match (mode, key.digit()) {
        (MatchMode::Menu, Some(digit @ 1..=2)) => {
            let mode = if digit == 1 {
                MatchMode::Pvp
            } else {
                MatchMode::Coop
            };
            commands.push(PlayerCommand::SelectMode { mode });
        }
        (MatchMode::Upgrade, Some(digit @ 1..=3)) => {
            let index = (digit - 1) as usize;
            commands.push(PlayerCommand::ChooseUpgrade { index });
        }
        _ => {}
    }

    for (slot, binding) in bindings.iter().enumerate() {
        if binding.fire == key {
            commands.push(PlayerCommand::Fire { slot: slot as u8 });
        }
    }

    if key == Key::Char('r') {
        commands.push(PlayerCommand::Restart);
    }

    commands
}
