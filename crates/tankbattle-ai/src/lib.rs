//! Enemy tank AI.
//!
//! Pure steering functions over plain data: pick the nearest living player,
//! turn toward it at a fixed rate, hold a stand-off distance band and fire
//! with a per-frame chance once roughly aimed.

pub mod profiles;
pub mod steering;

pub use tankbattle_core as core;

#[cfg(test)]
mod tests;
