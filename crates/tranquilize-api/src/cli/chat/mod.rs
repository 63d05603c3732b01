//! Interactive CLI chat experience for Tranquilize.
//!
//! This module implements the chat loop: welcome banner with the legal
//! notice, a sending spinner while the request is in flight, turn cards
//! rendered from each stored response, and slash commands.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
