//! Networking modules for the two outbound HTTP boundaries.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the inspection-management REST backend, `completion`
//! performs the chat-completion round trip, and `types` defines the backend
//! wire schema.

pub mod api;
pub mod completion;
pub mod types;
