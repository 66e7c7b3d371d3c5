//! Telegram command parsing.

/// Supported bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotCommand {
    Pause,
    Resume,
    /// Blacklist edit or listing; `args` is the raw text after the command
    /// (`<identity> <channel>`, or empty to list).
    Blacklist { args: String },
}

/// Parse error for Telegram messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    NotACommand,
    UnknownCommand(String),
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotACommand => write!(f, "message is not a command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command `{cmd}`"),
        }
    }
}

impl std::error::Error for CommandParseError {}

/// Parse a Telegram message into a bot command.
pub fn parse_command(text: &str) -> Result<BotCommand, CommandParseError> {
    let trimmed = text.trim();
    let (raw_command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (trimmed, ""),
    };

    if !raw_command.starts_with('/') {
        return Err(CommandParseError::NotACommand);
    }

    // Strip the bot mention suffix Telegram appends in group chats.
    let command = raw_command
        .split_once('@')
        .map_or(raw_command, |(head, _)| head);

    match command {
        "/pause" => Ok(BotCommand::Pause),
        "/resume" | "/restart" => Ok(BotCommand::Resume),
        "/blacklist" => Ok(BotCommand::Blacklist {
            args: rest.to_string(),
        }),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

/// Help text for invalid command replies.
#[must_use]
pub const fn command_help() -> &'static str {
    "Commands\n\n\
    /pause - stop fetching rates and scanning offers\n\
    /resume - resume after a pause\n\
    /blacklist - show the current blacklists\n\
    /blacklist <identity> <line|bank> - exclude an advertiser"
}
