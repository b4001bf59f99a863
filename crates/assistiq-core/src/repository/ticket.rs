//! TicketRepository trait definition.
//!
//! Provides create/list operations for support tickets. Uses native async
//! fn in traits (RPITIT, Rust 2024 edition).

use assistiq_types::error::RepositoryError;
use assistiq_types::ticket::Ticket;
use uuid::Uuid;

/// Repository trait for ticket persistence.
///
/// Implementations live in assistiq-infra (e.g., `SqliteTicketRepository`).
/// Tickets are append-only: there is no update or delete.
pub trait TicketRepository: Send + Sync {
    /// Persist a new ticket.
    fn create(
        &self,
        ticket: &Ticket,
    ) -> impl std::future::Future<Output = Result<Ticket, RepositoryError>> + Send;

    /// Get a ticket by its unique ID.
    fn get(
        &self,
        id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Ticket>, RepositoryError>> + Send;

    /// List all tickets, ordered by created_at DESC (newest first).
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Ticket>, RepositoryError>> + Send;

    /// Count stored tickets.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
