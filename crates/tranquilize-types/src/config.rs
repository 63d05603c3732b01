//! Client configuration types for Tranquilize.
//!
//! `ClientConfig` represents the `config.toml` that points the chat client
//! at a support endpoint.

use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://www.atendezap.chat/detectar";

/// Configuration for talking to the support endpoint.
///
/// Loaded from `~/.tranquilize/config.toml`. All fields have defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL that receives `POST {"text": ...}`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout. `None` waits for as long as the endpoint takes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: None,
        }
    }
}
