use thiserror::Error;

/// Errors from repository operations (used by trait definitions in assistiq-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors related to ticket operations.
#[derive(Debug, Error)]
pub enum TicketError {
    #[error("failed to save ticket: {0}")]
    Save(#[source] RepositoryError),

    #[error("failed to fetch tickets: {0}")]
    Fetch(#[source] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_ticket_error_display() {
        let err = TicketError::Save(RepositoryError::Connection);
        assert!(err.to_string().starts_with("failed to save ticket"));
    }
}
