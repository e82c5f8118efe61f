use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Responder,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Responder => "responder",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Message {
    /// Builds a message whose id is derived from its creation time. `seq`
    /// disambiguates messages created within the same millisecond.
    pub fn new(text: impl Into<String>, sender: Sender, timestamp: i64, seq: u64) -> Self {
        Self {
            id: format!("{timestamp}-{seq}"),
            text: text.into(),
            sender,
            timestamp,
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Formats an epoch-millis timestamp as a 24h `HH:MM` label in the given
/// offset from UTC. Out-of-range inputs render as `--:--`.
pub fn format_clock(timestamp: i64, utc_offset_minutes: i32) -> String {
    let Some(offset) = FixedOffset::east_opt(utc_offset_minutes.saturating_mul(60)) else {
        return "--:--".to_string();
    };
    match DateTime::from_timestamp_millis(timestamp) {
        Some(utc) => utc.with_timezone(&offset).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
