//! Business logic and port traits for Tranquilize.
//!
//! This crate decodes support-endpoint responses into displayable replies,
//! owns the conversation model, and defines the `SupportClient` port that the
//! infrastructure layer implements. It depends only on `tranquilize-types` --
//! never on `tranquilize-infra` or any network crate.

pub mod chat;
pub mod client;
pub mod reply;
