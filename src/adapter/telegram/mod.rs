//! Telegram transport: outbound notifications and inbound control commands.
//!
//! Requires the `telegram` feature.

mod command;
mod listener;
mod notifier;

pub use command::{parse_command, BotCommand, CommandParseError};
pub use listener::spawn_command_listener;
pub use notifier::{TelegramNotifier, TelegramSettings};
