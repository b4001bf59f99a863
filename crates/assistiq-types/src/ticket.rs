//! Support ticket types for AssistIQ.
//!
//! A ticket is a stored support request: who sent it, what they said, and
//! when it arrived. Tickets are created and listed, never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name substituted when the submitter omits theirs.
pub const DEFAULT_NAME: &str = "Guest";

/// Message substituted when the submitter sends an empty request.
pub const DEFAULT_MESSAGE: &str = "No message";

/// A stored support request.
///
/// `id` is a UUIDv7, so insertion order and `created_at` order agree.
/// Serializes with camelCase field names to match the public wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Build a new ticket from raw (possibly absent) form fields.
    ///
    /// Missing or blank fields get the `Guest` / `No message` defaults;
    /// the creation timestamp is set to now.
    pub fn new(name: Option<String>, message: Option<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: non_blank(name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            message: non_blank(message).unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            created_at: Utc::now(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_keeps_provided_fields() {
        let ticket = Ticket::new(Some("Ada".to_string()), Some("My login is broken".to_string()));
        assert_eq!(ticket.name, "Ada");
        assert_eq!(ticket.message, "My login is broken");
    }

    #[test]
    fn test_new_ticket_substitutes_defaults() {
        let ticket = Ticket::new(None, None);
        assert_eq!(ticket.name, DEFAULT_NAME);
        assert_eq!(ticket.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let ticket = Ticket::new(Some("   ".to_string()), Some(String::new()));
        assert_eq!(ticket.name, DEFAULT_NAME);
        assert_eq!(ticket.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let ticket = Ticket::new(Some("Ada".to_string()), Some("hi".to_string()));
        let json = serde_json::to_value(&ticket).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_created_at_is_non_decreasing() {
        let a = Ticket::new(None, None);
        let b = Ticket::new(None, None);
        assert!(a.created_at <= b.created_at);
    }
}
