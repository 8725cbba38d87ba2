/// Runtime configuration assembled once at process entry
///
/// Credentials are read from the environment a single time and threaded
/// through the pipeline as an explicit struct. Missing Telegram credentials
/// are not fatal here; the notifier refuses to dispatch instead.

use std::env;

pub const DEFAULT_HISTORY_PATH: &str = "movers_history.json";
pub const DEFAULT_MARKETS_URL: &str = "https://api.coingecko.com/api/v3/coins/markets";

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub chat_id: String,
    pub history_path: String,
    pub markets_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            chat_id: env::var("TELEGRAM_CHAT_ID").unwrap_or_default(),
            history_path: env::var("MOVERS_HISTORY_PATH")
                .unwrap_or_else(|_| DEFAULT_HISTORY_PATH.to_string()),
            markets_url: env::var("COINGECKO_API_URL")
                .unwrap_or_else(|_| DEFAULT_MARKETS_URL.to_string()),
        }
    }

    pub fn has_telegram_credentials(&self) -> bool {
        !self.bot_token.is_empty() && !self.chat_id.is_empty()
    }
}
