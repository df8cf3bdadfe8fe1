//! Outbound per-player message packs.
//!
//! Every seat receives the same ordered events plus its own redacted
//! snapshot. The issuer's pack starts with the `COMMAND_RESULT` for the
//! command it sent.

use serde::{Serialize, Serializer};

use super::command::Command;
use crate::domain::{Event, GameStateView, RuleViolation};

/// Outcome of a command, delivered to its issuer only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename = "COMMAND_RESULT", rename_all = "camelCase")]
pub struct CommandResult {
    pub command: Command,
    /// `null` on success.
    pub error: Option<RuleViolation>,
    /// Issuer's view after the command was applied.
    pub state: GameStateView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Result(CommandResult),
    Event(Event),
}

impl Serialize for Message {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Message::Result(result) => result.serialize(serializer),
            Message::Event(event) => event.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePack {
    pub messages: Vec<Message>,
    pub game_state: GameStateView,
}
