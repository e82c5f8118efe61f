mod config;
mod errors;
mod models;
mod routes;
mod service;

use axum::{routing::get, routing::post, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::routes::api_routes::{character_handler, health_handler, reply_handler};
use crate::routes::page_routes::shell_handler;
use crate::service::responder_service::ResponderService;

const DEFAULT_LOG_FILTER: &str = "character_chat=debug,character_chat_core=debug,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(
        "Simulated responder delays: reply {}ms, character {}ms",
        config.chat.reply_delay_ms, config.chat.character_delay_ms
    );

    let responder = ResponderService::new(config.chat.clone());
    let app = router(&config, responder);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(config: &ServerConfig, responder: ResponderService) -> Router {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/api/character", get(character_handler))
        .route("/api/reply", post(reply_handler))
        .layer(CorsLayer::permissive())
        .with_state(responder);

    // ── Page / static bundle ──────────────────────────────────────────────────
    let index = config.frontend_dist.join("index.html");
    let app = if index.is_file() {
        info!("Serving frontend bundle from {}", config.frontend_dist.display());
        api.fallback_service(ServeDir::new(&config.frontend_dist))
    } else {
        warn!(
            "No frontend bundle at {}; serving placeholder page",
            config.frontend_dist.display()
        );
        api.route("/", get(shell_handler))
    };

    app.layer(TraceLayer::new_for_http())
}
