// src/api/mod.rs — Reception desk HTTP server (the service the chat client talks to)

pub mod handlers;
pub mod types;
pub mod webhooks;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::desk::IntakeState;
use crate::infra::config::Config;
use crate::infra::session::SessionId;

/// Shared state for API handlers.
#[derive(Clone, Default)]
pub struct ApiState {
    /// Intake progress per session, created on first message.
    pub sessions: Arc<Mutex<HashMap<SessionId, IntakeState>>>,
    pub webhook_url: Option<String>,
}

impl ApiState {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            sessions: Arc::default(),
            webhook_url,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", o);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Build the axum router with all routes.
pub fn build_router(state: ApiState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Start the server and run until the process is interrupted.
pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    let state = ApiState::new(config.server.webhook_url.clone());
    let router = build_router(state, &config.server.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Reception desk listening on http://{addr}");
    eprintln!("frontdesk serving on http://{addr} (POST /chat)");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}
