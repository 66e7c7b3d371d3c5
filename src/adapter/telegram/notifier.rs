//! Telegram notification sending.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::error::{Error, Result, SettingsError};
use crate::port::Notifier;

/// Telegram credentials and target chat.
#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub bot_token: String,
    pub chat_id: i64,
}

impl TelegramSettings {
    /// Read `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID` from the
    /// environment. Both are required when the Telegram transport is
    /// enabled; a missing or malformed value is a fatal startup error.
    pub fn from_env() -> std::result::Result<Self, SettingsError> {
        let bot_token = crate::settings::require_env("TELEGRAM_BOT_TOKEN")?;
        let chat_id = crate::settings::require_env("TELEGRAM_CHAT_ID")?
            .parse()
            .map_err(|_| SettingsError::InvalidValue {
                field: "TELEGRAM_CHAT_ID",
                reason: "must be a numeric chat id".into(),
            })?;

        Ok(Self { bot_token, chat_id })
    }
}

/// Notifier that delivers messages to a single Telegram chat.
///
/// Delivery is awaited inline rather than queued: the scanner needs the
/// dispatch result to decide whether to record the advertiser in the spam
/// filter.
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(settings: &TelegramSettings) -> Self {
        Self {
            bot: Bot::new(&settings.bot_token),
            chat_id: ChatId(settings.chat_id),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, message: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, message)
            .await
            .map_err(|error| Error::Dispatch(error.to_string()))?;
        Ok(())
    }
}
