//! Infrastructure implementations for AssistIQ.
//!
//! Concrete adapters for the ports defined in `assistiq-core`:
//! SQLite persistence via sqlx and the OpenAI completion provider.

pub mod llm;
pub mod sqlite;
