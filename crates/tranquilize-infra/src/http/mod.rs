//! Support endpoint client implementations.
//!
//! Contains the reqwest-backed implementation of the [`SupportClient`] trait
//! defined in `tranquilize-core`, and a factory ([`create_client`]) that
//! builds the boxed client the binary runs with.
//!
//! [`SupportClient`]: tranquilize_core::client::support::SupportClient

pub mod client;

use tranquilize_core::client::box_client::BoxSupportClient;
use tranquilize_types::config::ClientConfig;
use tranquilize_types::error::ClientError;

pub use self::client::HttpSupportClient;

/// Create a [`BoxSupportClient`] from a [`ClientConfig`].
pub fn create_client(config: &ClientConfig) -> Result<BoxSupportClient, ClientError> {
    let client = HttpSupportClient::new(config)?;
    tracing::debug!(endpoint = %config.endpoint, "Created HTTP support client");
    Ok(BoxSupportClient::new(client))
}
