//! Support endpoint client abstractions.
//!
//! - `SupportClient`: RPITIT trait for concrete client implementations
//! - `BoxSupportClient`: object-safe wrapper for dynamic dispatch

pub mod box_client;
pub mod support;
