//! Response decoding and normalization.
//!
//! The support endpoint is loose about what it sends back: a JSON object, a
//! JSON-encoded string of that object, plain prose, or an acknowledgment
//! envelope (`{"mensagem": ..., "resposta": ...}`) around the real reply.
//! [`decode`] resolves all of these into a [`ReplyShape`] in one pass, and
//! [`normalize`] flattens that into the [`NormalizedReply`] the renderer shows,
//! substituting the fallback text when decoding fails.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use tranquilize_types::error::ReplyError;
use tranquilize_types::reply::{NormalizedReply, RawResponse, ReplyShape};

/// Field that marks an acknowledgment envelope.
const WRAPPER_FIELD: &str = "mensagem";
/// Field holding the primary reply text (or, in an envelope, the inner reply).
const RESPOSTA_FIELD: &str = "resposta";
const URL_FIELD: &str = "url";
const EXERCICIO_FIELD: &str = "exercicio";

/// Decode a raw response into its reply shape.
///
/// Strings are parsed as JSON when they look like it. Text that opens with
/// `{` but does not parse is malformed; any other unparseable text is
/// displayed as-is. Envelopes are unwrapped exactly once.
pub fn decode(raw: &RawResponse) -> Result<ReplyShape, ReplyError> {
    match raw {
        RawResponse::Text(text) => decode_text(text),
        RawResponse::Json(value) => decode_value(value),
    }
}

/// A raw response decoded for display, with the fallback already applied.
#[derive(Debug, PartialEq)]
pub struct DecodedReply {
    /// Shape label, or `None` when decoding failed.
    pub shape: Option<&'static str>,
    pub error: Option<ReplyError>,
    pub reply: NormalizedReply,
}

/// Decode a raw response, substituting [`NormalizedReply::fallback`] on error.
///
/// This is the one place the fallback rule lives; failures are logged here.
pub fn decode_or_fallback(raw: &RawResponse) -> DecodedReply {
    match decode(raw) {
        Ok(shape) => {
            debug!(shape = shape.label(), kind = raw.kind(), "Decoded support reply");
            DecodedReply {
                shape: Some(shape.label()),
                error: None,
                reply: shape.into_reply(),
            }
        }
        Err(e) => {
            warn!(error = %e, kind = raw.kind(), "Failed to decode support reply, showing fallback");
            DecodedReply {
                shape: None,
                error: Some(e),
                reply: NormalizedReply::fallback(),
            }
        }
    }
}

/// Decode and flatten a raw response. Never fails.
pub fn normalize(raw: &RawResponse) -> NormalizedReply {
    decode_or_fallback(raw).reply
}

fn decode_text(text: &str) -> Result<ReplyShape, ReplyError> {
    let trimmed = text.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(inner)) => Ok(ReplyShape::PlainText { text: inner }),
        Ok(Value::Number(_) | Value::Bool(_)) => Ok(ReplyShape::PlainText {
            text: trimmed.to_string(),
        }),
        Ok(value) => decode_value(&value),
        Err(e) if trimmed.starts_with('{') => Err(ReplyError::MalformedJson(e.to_string())),
        Err(_) => Ok(ReplyShape::PlainText {
            text: text.to_string(),
        }),
    }
}

fn decode_value(value: &Value) -> Result<ReplyShape, ReplyError> {
    match value {
        Value::Object(map) => classify_object(map),
        Value::String(text) => decode_text(text),
        Value::Number(n) => Ok(ReplyShape::PlainText {
            text: n.to_string(),
        }),
        Value::Bool(b) => Ok(ReplyShape::PlainText {
            text: b.to_string(),
        }),
        Value::Null => Err(ReplyError::UnsupportedShape("null")),
        Value::Array(_) => Err(ReplyError::UnsupportedShape("array")),
    }
}

fn classify_object(map: &Map<String, Value>) -> Result<ReplyShape, ReplyError> {
    if map.get(WRAPPER_FIELD).is_some_and(is_truthy) {
        // Single-level unwrap: the inner object is read as-is, even if it
        // carries its own `mensagem`.
        let reply = match map.get(RESPOSTA_FIELD) {
            Some(Value::String(text)) => NormalizedReply::text(text.clone()),
            Some(Value::Object(inner)) => read_reply(inner)?,
            _ => return Err(ReplyError::MissingResposta),
        };
        return Ok(ReplyShape::WrappedReply { reply });
    }

    Ok(ReplyShape::StructuredReply {
        reply: read_reply(map)?,
    })
}

fn read_reply(map: &Map<String, Value>) -> Result<NormalizedReply, ReplyError> {
    let resposta = match map.get(RESPOSTA_FIELD) {
        Some(Value::String(text)) => text.clone(),
        _ => return Err(ReplyError::MissingResposta),
    };

    Ok(NormalizedReply {
        resposta,
        url: optional_text(map, URL_FIELD),
        exercicio: optional_text(map, EXERCICIO_FIELD),
    })
}

/// A display field counts only when it is a non-empty string.
fn optional_text(map: &Map<String, Value>, field: &str) -> Option<String> {
    match map.get(field) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// Loose truthiness for the envelope marker: `false`, `null`, `0` and `""` are off.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
