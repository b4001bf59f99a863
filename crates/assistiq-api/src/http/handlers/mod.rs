//! REST API request handlers.

pub mod chat;
pub mod home;
pub mod ticket;
