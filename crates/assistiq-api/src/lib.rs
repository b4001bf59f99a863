//! Application layer for AssistIQ: CLI commands, HTTP router/handlers, and
//! the AppState wiring them to the infrastructure implementations.
//!
//! Exposed as a library so integration tests can drive the router directly.

pub mod cli;
pub mod http;
pub mod state;
