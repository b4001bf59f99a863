//! Ticket intake handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the intake endpoint. Both fields are optional;
/// missing or blank values get the `Guest` / `No message` defaults.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub name: Option<String>,
    pub message: Option<String>,
}

/// Response body: the stored ticket id and the reply text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub ticket_id: Uuid,
    pub reply: String,
}

/// POST /chat - Store a ticket and respond with a generated (or fallback) reply.
pub async fn create_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let outcome = state
        .ticket_service
        .open_ticket(body.name, body.message)
        .await?;

    Ok(Json(ChatResponse {
        ticket_id: outcome.ticket.id,
        reply: outcome.reply,
    }))
}
