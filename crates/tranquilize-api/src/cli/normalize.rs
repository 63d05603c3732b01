//! Offline decoding of a raw endpoint response.
//!
//! Useful for checking how a captured response body would render without
//! sending anything over the network.

use console::style;
use serde::Serialize;
use tokio::io::AsyncReadExt;

use tranquilize_core::reply::decode_or_fallback;
use tranquilize_types::reply::{NormalizedReply, RawResponse};

use super::chat::renderer::ChatRenderer;

/// Result of decoding one raw body.
#[derive(Debug, Serialize)]
pub struct NormalizeReport {
    /// How the body was taken off the wire: "json" or "text".
    pub raw_kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub reply: NormalizedReply,
}

impl NormalizeReport {
    /// Decode `body` the same way a response from the endpoint is decoded.
    pub fn from_body(body: String) -> Self {
        let raw = RawResponse::from_body(body);
        let decoded = decode_or_fallback(&raw);
        Self {
            raw_kind: raw.kind(),
            shape: decoded.shape,
            error: decoded.error.map(|e| e.to_string()),
            reply: decoded.reply,
        }
    }
}

/// Decode `raw` (or stdin when `None`) and print the outcome.
pub async fn normalize_raw(raw: Option<String>, json: bool) -> anyhow::Result<()> {
    let body = match raw {
        Some(body) => body,
        None => {
            let mut body = String::new();
            tokio::io::stdin().read_to_string(&mut body).await?;
            body
        }
    };

    let report = NormalizeReport::from_body(body);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    match (&report.shape, &report.error) {
        (Some(shape), _) => println!(
            "  {} {} {}",
            style("✓").green(),
            style(shape).cyan(),
            style(format!("(from {})", report.raw_kind)).dim()
        ),
        (None, Some(error)) => println!(
            "  {} {} {}",
            style("✗").red(),
            error,
            style("(fallback shown)").dim()
        ),
        (None, None) => {}
    }
    println!();
    println!(
        "{}",
        ChatRenderer::new()
            .render_card("(raw input)", &report.reply)
    );

    Ok(())
}
