//! Business logic and repository trait definitions for AssistIQ.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements. It depends only on `assistiq-types` --
//! never on `assistiq-infra` or any database/IO crate.

pub mod llm;
pub mod repository;
pub mod ticket;
