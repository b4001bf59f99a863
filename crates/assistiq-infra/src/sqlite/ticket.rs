//! SQLite ticket repository implementation.
//!
//! Implements `TicketRepository` from `assistiq-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, writer-pool inserts,
//! reader-pool selects.

use assistiq_core::repository::ticket::TicketRepository;
use assistiq_types::error::RepositoryError;
use assistiq_types::ticket::Ticket;
use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TicketRepository`.
pub struct SqliteTicketRepository {
    pool: DatabasePool,
}

impl SqliteTicketRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Ticket.
struct TicketRow {
    id: String,
    name: String,
    message: String,
    created_at: String,
}

impl TicketRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            message: row.try_get("message")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_ticket(self) -> Result<Ticket, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid ticket id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Ticket {
            id,
            name: self.name,
            message: self.message,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl TicketRepository for SqliteTicketRepository {
    async fn create(&self, ticket: &Ticket) -> Result<Ticket, RepositoryError> {
        sqlx::query(
            "INSERT INTO tickets (id, name, message, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(ticket.id.to_string())
        .bind(&ticket.name)
        .bind(&ticket.message)
        .bind(format_datetime(&ticket.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(ticket.clone())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Ticket>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM tickets WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let ticket_row =
                    TicketRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(ticket_row.into_ticket()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Ticket>, RepositoryError> {
        // UUIDv7 ids are time-ordered, so they break created_at ties in
        // insertion order.
        let rows = sqlx::query("SELECT * FROM tickets ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut tickets = Vec::with_capacity(rows.len());
        for row in &rows {
            let ticket_row =
                TicketRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            tickets.push(ticket_row.into_ticket()?);
        }

        Ok(tickets)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM tickets")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count as u64)
    }
}
