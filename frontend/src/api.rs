use async_trait::async_trait;
use character_chat_core::{Character, ChatError, Responder};
use gloo_net::http::{Request, Response};

use crate::models::{ErrorBody, ReplyRequest, ReplyResponse};

/// Responder backed by the server's simulated API.
pub struct HttpResponder {
    base: String,
}

impl HttpResponder {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    fn unreachable(&self, e: gloo_net::Error) -> ChatError {
        ChatError::Remote { url: self.base.clone(), message: format!("Network error: {e}") }
    }
}

/// Turns a non-2xx response into the server's error text.
async fn server_error(resp: Response) -> String {
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Server error: {}", resp.status()),
    }
}

#[async_trait(?Send)]
impl Responder for HttpResponder {
    async fn generate_character(&self) -> Result<Character, ChatError> {
        let resp = Request::get(&format!("{}/api/character", self.base))
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if !resp.ok() {
            return Err(ChatError::CharacterGeneration(server_error(resp).await));
        }

        resp.json::<Character>()
            .await
            .map_err(|e| ChatError::CharacterGeneration(format!("Parse error: {e}")))
    }

    async fn reply(&self, character: &Character, text: &str) -> Result<String, ChatError> {
        let body = ReplyRequest { message: text, character };

        let resp = Request::post(&format!("{}/api/reply", self.base))
            .json(&body)
            .map_err(|e| ChatError::Send(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        if !resp.ok() {
            return Err(ChatError::Send(server_error(resp).await));
        }

        resp.json::<ReplyResponse>()
            .await
            .map(|r| r.message.text)
            .map_err(|e| ChatError::Send(format!("Parse error: {e}")))
    }
}
