//! Conversation state and the send path for Tranquilize.
//!
//! `Conversation` is the ordered list of turns owned by the top-level view;
//! `ChatService` turns user input into new turns through a `SupportClient`.

pub mod conversation;
pub mod service;
