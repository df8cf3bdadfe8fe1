#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use adapters::InMemoryGameStore;
pub use config::EngineConfig;
pub use engine::{build_packs, handle_message, Outbound};
pub use error::{AppError, ErrorBody};
pub use errors::{DomainError, ErrorCode};
pub use protocol::{Command, CommandResult, Message, MessagePack};
pub use repos::GameStore;
pub use services::GameService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
