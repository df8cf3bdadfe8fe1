//! Game engine test support utilities
//!
//! Shared logging bootstrap for unit and integration tests of the engine.

pub mod logging;
