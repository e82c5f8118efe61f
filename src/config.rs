use std::path::PathBuf;

use character_chat_core::ChatConfig;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_DIST: &str = "frontend/dist";

/// Server settings, read from the environment (after `.env` is loaded).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub frontend_dist: PathBuf,
    pub chat: ChatConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ChatConfig::default();
        let millis = |key: &str, fallback: u64| {
            lookup(key).and_then(|v| v.parse().ok()).unwrap_or(fallback)
        };

        Self {
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_dist: lookup("FRONTEND_DIST")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIST)),
            chat: ChatConfig {
                reply_delay_ms: millis("REPLY_DELAY_MS", defaults.reply_delay_ms),
                character_delay_ms: millis("CHARACTER_DELAY_MS", defaults.character_delay_ms),
            },
        }
    }
}
