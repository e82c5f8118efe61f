use std::time::Duration;

use serde::Deserialize;

const DEFAULT_REPLY_DELAY_MS: u64 = 1000;
const DEFAULT_CHARACTER_DELAY_MS: u64 = 500;

/// Tunables for the simulated responder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Artificial latency before a reply is produced.
    pub reply_delay_ms: u64,
    /// Artificial latency before a generated character is returned.
    pub character_delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            character_delay_ms: DEFAULT_CHARACTER_DELAY_MS,
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn character_delay(&self) -> Duration {
        Duration::from_millis(self.character_delay_ms)
    }

    /// Returns a copy with both delays removed, handy for tests and demos.
    pub fn without_delays(mut self) -> Self {
        self.reply_delay_ms = 0;
        self.character_delay_ms = 0;
        self
    }
}
