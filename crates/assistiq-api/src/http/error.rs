//! Application error type mapping to HTTP status codes and the `{ "error": ... }` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use assistiq_types::error::TicketError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Ticket persistence or lookup failures.
    Ticket(TicketError),
}

impl From<TicketError> for AppError {
    fn from(e: TicketError) -> Self {
        AppError::Ticket(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Ticket(e @ TicketError::Save(_)) => {
                tracing::error!(error = %e, "Chat endpoint error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to save ticket")
            }
            AppError::Ticket(e @ TicketError::Fetch(_)) => {
                tracing::error!(error = %e, "Ticket list error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch tickets")
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistiq_types::error::RepositoryError;

    #[test]
    fn test_save_failure_maps_to_500() {
        let err = AppError::Ticket(TicketError::Save(RepositoryError::Connection));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
