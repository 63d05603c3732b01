//! Reply types for the support endpoint.
//!
//! A response moves through three shapes:
//! - [`RawResponse`]: the body exactly as it came off the wire
//! - [`ReplyShape`]: the tagged union produced by decoding the raw body once
//! - [`NormalizedReply`]: the flat structure the renderer displays

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown in place of a reply that could not be decoded.
pub const FALLBACK_REPLY_TEXT: &str = "Erro ao carregar a resposta.";

/// Response body as received from the support endpoint.
///
/// The endpoint sometimes answers with a JSON-encoded string and sometimes
/// with a JSON object. The body is stored untouched; decoding happens on
/// render and can be repeated at will.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum RawResponse {
    /// A body that was not (or could not be) parsed as JSON.
    Text(String),
    /// A body that parsed as JSON (object, string, or anything else).
    Json(serde_json::Value),
}

impl RawResponse {
    /// Build a raw response from an HTTP body, keeping it as JSON when it parses.
    pub fn from_body(body: String) -> Self {
        match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => RawResponse::Json(value),
            Err(_) => RawResponse::Text(body),
        }
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RawResponse::Text(_) => "text",
            RawResponse::Json(_) => "json",
        }
    }
}

impl fmt::Display for RawResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawResponse::Text(text) => write!(f, "{text}"),
            RawResponse::Json(value) => write!(f, "{value}"),
        }
    }
}

/// The displayable reply: primary text, optional link, optional exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedReply {
    pub resposta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercicio: Option<String>,
}

impl NormalizedReply {
    /// A reply carrying only display text.
    pub fn text(resposta: impl Into<String>) -> Self {
        Self {
            resposta: resposta.into(),
            url: None,
            exercicio: None,
        }
    }

    /// The reply shown when decoding fails.
    pub fn fallback() -> Self {
        Self::text(FALLBACK_REPLY_TEXT)
    }

    /// Whether this is the decode-failure placeholder.
    pub fn is_fallback(&self) -> bool {
        self.resposta == FALLBACK_REPLY_TEXT && self.url.is_none() && self.exercicio.is_none()
    }
}

/// A raw response after a single decoding pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ReplyShape {
    /// Free text, either non-JSON or a JSON-encoded string.
    PlainText { text: String },
    /// An object carrying `resposta` (and optionally `url`/`exercicio`) directly.
    StructuredReply { reply: NormalizedReply },
    /// An acknowledgment envelope (`mensagem`) whose `resposta` held the reply.
    WrappedReply { reply: NormalizedReply },
}

impl ReplyShape {
    /// Flatten the shape into the structure the renderer displays.
    pub fn into_reply(self) -> NormalizedReply {
        match self {
            ReplyShape::PlainText { text } => NormalizedReply::text(text),
            ReplyShape::StructuredReply { reply } | ReplyShape::WrappedReply { reply } => reply,
        }
    }

    /// Short label used in logs and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ReplyShape::PlainText { .. } => "plain_text",
            ReplyShape::StructuredReply { .. } => "structured_reply",
            ReplyShape::WrappedReply { .. } => "wrapped_reply",
        }
    }
}

impl fmt::Display for ReplyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
