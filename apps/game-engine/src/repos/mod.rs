//! Repository traits for the engine.

pub mod games;

pub use games::{require_game, GameStore};
