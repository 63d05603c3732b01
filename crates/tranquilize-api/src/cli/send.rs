//! One-shot send: a single turn, rendered or printed as JSON.

use anyhow::bail;
use serde::Serialize;

use tranquilize_core::chat::conversation::Conversation;
use tranquilize_core::chat::service::SendOutcome;
use tranquilize_core::reply::decode_or_fallback;
use tranquilize_types::chat::ChatTurn;
use tranquilize_types::reply::{NormalizedReply, RawResponse};

use crate::state::AppState;

use super::chat::renderer::{sending_spinner, ChatRenderer};

/// JSON view of a completed turn.
#[derive(Debug, Serialize)]
pub struct TurnReport<'a> {
    pub user_text: &'a str,
    /// Decoded shape label, or `None` when the fallback was used.
    pub shape: Option<&'static str>,
    pub reply: NormalizedReply,
    pub raw_response: &'a RawResponse,
}

impl<'a> TurnReport<'a> {
    pub fn from_turn(turn: &'a ChatTurn) -> Self {
        let decoded = decode_or_fallback(&turn.raw_response);

        Self {
            user_text: &turn.user_text,
            shape: decoded.shape,
            reply: decoded.reply,
            raw_response: &turn.raw_response,
        }
    }
}

/// Send `text` once and print the resulting turn.
pub async fn send_message(state: &AppState, text: &str, json: bool) -> anyhow::Result<()> {
    let mut conversation = Conversation::new();

    let spinner = (!json).then(sending_spinner);
    let outcome = state.chat_service.send(&mut conversation, text).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let turn = match outcome {
        SendOutcome::Appended { index } => match conversation.get(index) {
            Some(turn) => turn,
            None => bail!("turn {index} missing from conversation"),
        },
        SendOutcome::Skipped => bail!("message is empty"),
        SendOutcome::Busy => bail!("another message is still being sent"),
        SendOutcome::Dropped => bail!("request to {} failed (run with -v for details)", state.config.endpoint),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&TurnReport::from_turn(turn))?);
    } else {
        println!();
        println!("{}", ChatRenderer::new().render_turn(turn));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_report_for_structured_reply() {
        let turn = ChatTurn::new(
            "estou ansioso",
            RawResponse::Text(r#"{"resposta":"Respire fundo","exercicio":"4-7-8"}"#.to_string()),
        );
        let report = serde_json::to_value(TurnReport::from_turn(&turn)).unwrap();
        assert_eq!(report["user_text"], "estou ansioso");
        assert_eq!(report["shape"], "structured_reply");
        assert_eq!(
            report["reply"],
            json!({"resposta": "Respire fundo", "exercicio": "4-7-8"})
        );
        assert_eq!(report["raw_response"]["kind"], "text");
    }

    #[test]
    fn test_turn_report_for_malformed_reply() {
        let turn = ChatTurn::new("oi", RawResponse::Text("{oops".to_string()));
        let report = TurnReport::from_turn(&turn);
        assert!(report.shape.is_none());
        assert!(report.reply.is_fallback());
    }
}
