//! Systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only)
//! plus the entity lists the engine owns. They keep no state of their own.

pub mod cleanup;
pub mod collision;
pub mod control;
pub mod outcome;
pub mod snapshot;
pub mod waves;
