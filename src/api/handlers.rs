// src/api/handlers.rs

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::api::types::{ErrorResponse, HealthResponse};
use crate::api::{webhooks, ApiState};
use crate::client::{ChatReply, ChatRequest};

/// GET / — Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        message: "Hospital Receptionist AI Backend is running".into(),
    })
}

/// POST /chat — Advance the intake flow for one session by one message.
pub async fn chat(
    State(state): State<ApiState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, Json<ErrorResponse>)> {
    if body.message.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: "message must not be empty".into(),
            }),
        ));
    }

    let step = {
        let Ok(mut sessions) = state.sessions.lock() else {
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal error: session store unavailable".into(),
                }),
            ));
        };
        let intake = sessions.entry(body.session_id.clone()).or_insert_with(|| {
            tracing::info!("New intake session {}", body.session_id);
            Default::default()
        });
        intake.handle(&body.message)
    };

    if let Some(registration) = step.registration {
        tracing::info!(
            "Registration complete for session {} ({:?})",
            body.session_id,
            registration.ward
        );
        webhooks::fire_registration(state.webhook_url.as_deref(), registration);
    }

    Ok(Json(ChatReply { reply: step.reply }))
}
