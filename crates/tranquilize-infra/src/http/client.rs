//! HttpSupportClient -- concrete [`SupportClient`] for the HTTP support endpoint.
//!
//! POSTs `{"text": ...}` as JSON to the configured endpoint. No auth headers.
//! A 2xx body is returned as JSON when it parses and as text otherwise;
//! any other status is an error.

use std::time::Duration;

use tracing::debug;

use tranquilize_core::client::support::SupportClient;
use tranquilize_types::chat::DetectRequest;
use tranquilize_types::config::ClientConfig;
use tranquilize_types::error::ClientError;
use tranquilize_types::reply::RawResponse;

/// Support endpoint client over HTTP.
pub struct HttpSupportClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSupportClient {
    /// Build a client for the configured endpoint.
    ///
    /// Requests have no timeout unless `request_timeout_secs` is set.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl SupportClient for HttpSupportClient {
    fn name(&self) -> &str {
        "http"
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn detect(&self, request: &DetectRequest) -> Result<RawResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Body(e.to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "Support endpoint responded");
        Ok(RawResponse::from_body(body))
    }
}
