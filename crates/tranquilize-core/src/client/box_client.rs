//! BoxSupportClient -- object-safe dynamic dispatch wrapper for SupportClient.
//!
//! 1. Define an object-safe `SupportClientDyn` trait with boxed futures
//! 2. Blanket-impl `SupportClientDyn` for all `T: SupportClient`
//! 3. `BoxSupportClient` wraps `Box<dyn SupportClientDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use tranquilize_types::chat::DetectRequest;
use tranquilize_types::error::ClientError;
use tranquilize_types::reply::RawResponse;

use super::support::SupportClient;

/// Object-safe version of [`SupportClient`] with boxed futures.
pub trait SupportClientDyn: Send + Sync {
    fn name(&self) -> &str;

    fn endpoint(&self) -> &str;

    fn detect_boxed<'a>(
        &'a self,
        request: &'a DetectRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ClientError>> + Send + 'a>>;
}

impl<T: SupportClient> SupportClientDyn for T {
    fn name(&self) -> &str {
        SupportClient::name(self)
    }

    fn endpoint(&self) -> &str {
        SupportClient::endpoint(self)
    }

    fn detect_boxed<'a>(
        &'a self,
        request: &'a DetectRequest,
    ) -> Pin<Box<dyn Future<Output = Result<RawResponse, ClientError>> + Send + 'a>> {
        Box::pin(self.detect(request))
    }
}

/// Type-erased support client for runtime client selection.
///
/// `SupportClient` uses RPITIT and cannot be a trait object directly, so this
/// wrapper goes through `SupportClientDyn` and itself implements
/// `SupportClient`, letting it slot into generic services.
pub struct BoxSupportClient {
    inner: Box<dyn SupportClientDyn + Send + Sync>,
}

impl BoxSupportClient {
    /// Wrap a concrete `SupportClient` in a type-erased box.
    pub fn new<T: SupportClient + 'static>(client: T) -> Self {
        Self {
            inner: Box::new(client),
        }
    }
}

impl SupportClient for BoxSupportClient {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    async fn detect(&self, request: &DetectRequest) -> Result<RawResponse, ClientError> {
        self.inner.detect_boxed(request).await
    }
}
