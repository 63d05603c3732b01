//! SupportClient trait definition.
//!
//! The port through which a chat message reaches the remote support
//! endpoint. Implementations live in tranquilize-infra (e.g.
//! `HttpSupportClient`); tests provide in-memory mocks.

use tranquilize_types::chat::DetectRequest;
use tranquilize_types::error::ClientError;
use tranquilize_types::reply::RawResponse;

/// Trait for support endpoint backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The response
/// is handed back as a [`RawResponse`] without any interpretation; decoding
/// is the caller's concern.
pub trait SupportClient: Send + Sync {
    /// Human-readable client name (e.g., "http").
    fn name(&self) -> &str;

    /// Where requests are sent, for banners and logs.
    fn endpoint(&self) -> &str;

    /// Send one message and return the response body as received.
    fn detect(
        &self,
        request: &DetectRequest,
    ) -> impl std::future::Future<Output = Result<RawResponse, ClientError>> + Send;
}
