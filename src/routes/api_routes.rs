use axum::extract::State;
use axum::Json;
use character_chat_core::Character;

use crate::errors::AppError;
use crate::models::{Health, ReplyRequest, ReplyResponse};
use crate::service::responder_service::ResponderService;

/// GET `/api/character` — a freshly drawn character as JSON
pub async fn character_handler(State(svc): State<ResponderService>) -> Json<Character> {
    Json(svc.generate_character().await)
}

/// POST `/api/reply` — simulated in-character answer to the user's message
pub async fn reply_handler(
    State(svc): State<ResponderService>,
    Json(request): Json<ReplyRequest>,
) -> Result<Json<ReplyResponse>, AppError> {
    svc.reply(request).await.map(Json)
}

/// GET `/health`
pub async fn health_handler() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}
