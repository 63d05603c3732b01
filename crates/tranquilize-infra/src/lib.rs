//! Infrastructure layer for Tranquilize.
//!
//! Contains the implementations of the ports defined in `tranquilize-core`:
//! the reqwest-backed support endpoint client, plus configuration file
//! loading and data directory resolution.

pub mod config;
pub mod filesystem;
pub mod http;
