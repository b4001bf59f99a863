//! Ticket intake orchestration for AssistIQ.
//!
//! This module defines the `TicketService` that coordinates persistence and
//! the single outbound completion call with its fixed fallback reply.

pub mod service;
