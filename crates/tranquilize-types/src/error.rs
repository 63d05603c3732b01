use thiserror::Error;

/// Reasons a raw response could not be decoded into a reply shape.
#[derive(Debug, Error, PartialEq)]
pub enum ReplyError {
    #[error("malformed JSON in response: {0}")]
    MalformedJson(String),

    #[error("response object has no string 'resposta' field")]
    MissingResposta,

    #[error("unsupported response shape: {0}")]
    UnsupportedShape(&'static str),
}

/// Errors from talking to the support endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{0}': must start with http:// or https://")]
    InvalidEndpoint(String),
}
