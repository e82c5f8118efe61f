use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use character_chat_core::character::simulated_reply;
use character_chat_core::{Character, ChatConfig, Message, Sender};
use chrono::Utc;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::{ReplyRequest, ReplyResponse};

const MAX_MESSAGE_LENGTH: usize = 8000;

/// Simulated language-model backend shared by the HTTP handlers.
#[derive(Clone)]
pub struct ResponderService {
    config: ChatConfig,
    seq: Arc<AtomicU64>,
}

impl ResponderService {
    pub fn new(config: ChatConfig) -> Self {
        Self { config, seq: Arc::new(AtomicU64::new(0)) }
    }

    pub async fn generate_character(&self) -> Character {
        tokio::time::sleep(self.config.character_delay()).await;
        let character = Character::random(&mut rand::thread_rng());
        info!("Generated character {} ({})", character.name, character.personality);
        character
    }

    pub async fn reply(&self, request: ReplyRequest) -> Result<ReplyResponse, AppError> {
        // ── Validation ────────────────────────────────────────────────────────
        if request.message.trim().is_empty() {
            return Err(AppError::empty("message"));
        }
        if request.message.len() > MAX_MESSAGE_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "message".to_string(),
                max_length: MAX_MESSAGE_LENGTH,
                actual_length: request.message.len(),
            });
        }
        if request.character.has_blank_field() {
            return Err(AppError::empty("character"));
        }

        // ── Simulated latency, then the canned answer ─────────────────────────
        tokio::time::sleep(self.config.reply_delay()).await;
        let text = simulated_reply(&request.character, &request.message);
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let message = Message::new(text, Sender::Responder, Utc::now().timestamp_millis(), seq);
        debug!("Replying as {} with message {}", request.character.name, message.id);

        Ok(ReplyResponse { message })
    }
}
