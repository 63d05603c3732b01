//! Shared domain types for Tranquilize.
//!
//! This crate contains the data shapes exchanged with the support endpoint:
//! raw responses, decoded reply shapes, normalized replies, chat turns,
//! client configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod reply;
