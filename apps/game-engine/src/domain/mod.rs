//! Domain layer: pure game rules, no I/O.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod checkers;
pub mod dealing;
pub mod events;
pub mod handlers;
pub mod player_view;
pub mod round;
pub mod state;
pub mod timers;
pub mod violations;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_props_conservation;

// Re-exports for ergonomics
pub use cards_logic::beats;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{new_game, NewPlayer};
pub use events::{Event, EventKind, GameResult};
pub use handlers::{apply, Action};
pub use player_view::{project, GameStateView, OtherPlayerView};
pub use state::{Game, GameSettings, Player, PlayerId, Role, TableCard};
pub use timers::{Timer, TimerKind};
pub use violations::RuleViolation;
