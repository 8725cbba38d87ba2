/// Telegram Bot API delivery for rendered reports

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{error, info};

use crate::config::Config;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
const API_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Telegram credentials missing, set TELEGRAM_BOT_TOKEN and TELEGRAM_CHAT_ID")]
    MissingCredentials,

    #[error("Telegram API rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct TelegramNotifier {
    client: Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(API_TIMEOUT_SECS))
                .build()
                .expect("Failed to create Telegram HTTP client"),
            api_base: TELEGRAM_API_BASE.to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    /// Delivers the report text with Markdown rendering enabled. Missing
    /// credentials short-circuit before any network call; a rejected or
    /// failed request is logged and never retried.
    pub async fn send(&self, text: &str) -> Result<(), DispatchError> {
        if self.bot_token.is_empty() || self.chat_id.is_empty() {
            error!("Telegram credentials missing, report not dispatched");
            return Err(DispatchError::MissingCredentials);
        }

        let url = format!("{}/bot{}/sendMessage", self.api_base, self.bot_token);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "Markdown"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!("Telegram report delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Telegram API rejected report");
            Err(DispatchError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str, chat_id: &str) -> Config {
        Config {
            bot_token: token.to_string(),
            chat_id: chat_id.to_string(),
            history_path: String::new(),
            markets_url: String::new(),
        }
    }

    #[tokio::test]
    async fn test_send_without_token_short_circuits() {
        let notifier = TelegramNotifier::new(&config("", "42"));
        let result = notifier.send("hello").await;
        assert!(matches!(result, Err(DispatchError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_send_without_chat_id_short_circuits() {
        let notifier = TelegramNotifier::new(&config("123:abc", ""));
        let result = notifier.send("hello").await;
        assert!(matches!(result, Err(DispatchError::MissingCredentials)));
    }
}
