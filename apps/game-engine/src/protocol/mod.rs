//! Wire types exchanged with the transport relay.

pub mod command;
pub mod message_pack;

pub use command::Command;
pub use message_pack::{CommandResult, Message, MessagePack};
