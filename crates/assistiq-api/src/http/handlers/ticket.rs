//! Ticket listing handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use assistiq_types::ticket::Ticket;

use crate::http::error::AppError;
use crate::state::AppState;

/// Response body for the ticket listing.
#[derive(Debug, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<Ticket>,
}

/// GET /tickets - List all stored tickets, newest first.
pub async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<TicketListResponse>, AppError> {
    let tickets = state.ticket_service.list_tickets().await?;
    Ok(Json(TicketListResponse { tickets }))
}
