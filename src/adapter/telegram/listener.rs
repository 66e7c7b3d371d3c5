//! Telegram command listener.
//!
//! Listens for bot commands in the configured chat and dispatches them to
//! the control plane. Messages from other chats are ignored, as are
//! non-command messages; unrecognized commands are logged but get no reply.

use teloxide::prelude::*;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::app::control::ControlPlane;

use super::command::{command_help, parse_command, BotCommand, CommandParseError};
use super::notifier::TelegramSettings;

/// Spawn the background task handling inbound bot commands.
pub fn spawn_command_listener(
    settings: TelegramSettings,
    control: ControlPlane,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let bot = Bot::new(&settings.bot_token);
        let allowed_chat = ChatId(settings.chat_id);

        info!(chat_id = settings.chat_id, "Telegram command listener started");

        teloxide::repl(bot, move |bot: Bot, msg: Message| {
            let control = control.clone();
            async move {
                let Some(text) = msg.text() else {
                    return respond(());
                };

                if let Some(response) =
                    response_for_message(text, msg.chat.id, allowed_chat, &control)
                {
                    if let Err(e) = bot.send_message(msg.chat.id, response).await {
                        error!(error = %e, "failed to send command response");
                    }
                }

                respond(())
            }
        })
        .await;
    })
}

/// Compute the reply for one inbound message, if any.
fn response_for_message(
    text: &str,
    incoming_chat: ChatId,
    allowed_chat: ChatId,
    control: &ControlPlane,
) -> Option<String> {
    if incoming_chat != allowed_chat {
        warn!(chat_id = incoming_chat.0, "ignoring message from unauthorized chat");
        return None;
    }

    match parse_command(text) {
        Ok(command) => Some(execute(command, control)),
        Err(CommandParseError::NotACommand) => None,
        Err(CommandParseError::UnknownCommand(cmd)) => {
            info!(command = %cmd, "ignoring unrecognized command");
            None
        }
    }
}

fn execute(command: BotCommand, control: &ControlPlane) -> String {
    match command {
        BotCommand::Pause => control.pause(),
        BotCommand::Resume => control.resume(),
        BotCommand::Blacklist { args } => match control.blacklist_edit(&args) {
            Ok(reply) => reply,
            Err(error) => format!("Invalid command: {error}\n\n{}", command_help()),
        },
    }
}
