//! Shared domain types for AssistIQ.
//!
//! This crate contains the core domain types used across the AssistIQ
//! service: Ticket, the LLM request/response shapes, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod error;
pub mod llm;
pub mod ticket;
