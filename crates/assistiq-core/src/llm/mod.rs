//! LLM provider abstraction for AssistIQ.
//!
//! Defines the `LlmProvider` trait that concrete provider implementations
//! (assistiq-infra) satisfy. The ticket service only ever makes a single
//! non-streaming completion call.

pub mod provider;
