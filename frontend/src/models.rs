use character_chat_core::{Character, Message};
use serde::{Deserialize, Serialize};

/// Request body for the server's `POST /api/reply`.
#[derive(Clone, Debug, Serialize)]
pub struct ReplyRequest<'a> {
    pub message: &'a str,
    pub character: &'a Character,
}

/// Matches the server's `ReplyResponse`.
#[derive(Clone, Debug, Deserialize)]
pub struct ReplyResponse {
    pub message: Message,
}

/// Matches the server's error body.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
