use thiserror::Error;

/// Errors surfaced by the chat session. Every variant carries a
/// human-readable message, which is what ends up in `SessionState::error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    // ── Responder errors ─────────────────────────────────────────────────────
    #[error("{}", or_default(.0, "Failed to generate character"))]
    CharacterGeneration(String),

    #[error("{}", or_default(.0, "Failed to send message"))]
    Send(String),

    #[error("Responder unavailable at {url}: {message}")]
    Remote { url: String, message: String },

    // ── Preference storage errors ────────────────────────────────────────────
    #[error("Preference storage failed: {0}")]
    Storage(String),
}

fn or_default<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() { fallback } else { message }
}

impl ChatError {
    pub fn is_remote(&self) -> bool {
        matches!(self, ChatError::Remote { .. })
    }
}
