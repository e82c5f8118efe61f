use character_chat_core::{Character, Message};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/reply`.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub message: String,
    pub character: Character,
}

#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub message: Message,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}
