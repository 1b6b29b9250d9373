//! Tank battle host.
//!
//! Runs the simulation engine on a fixed-cadence thread, feeds it host
//! events (keys, resize) over a channel and keeps the latest snapshot for
//! synchronous polling. The `tankbattle` binary drives a headless session
//! through this crate.

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod host;
pub mod state;

pub use error::AppError;
pub use tankbattle_core as core;
