//! Terminal rendering of chat turns.
//!
//! `ChatRenderer` turns a stored turn into a card: the user's text, the
//! reply text (rendered as markdown through `termimad`), an optional
//! reference link, and an optional exercise line. The reply is always
//! re-derived from the turn's raw response.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use termimad::MadSkin;

use tranquilize_core::reply::normalize;
use tranquilize_types::chat::ChatTurn;
use tranquilize_types::reply::NormalizedReply;

pub const USER_LABEL: &str = "Você:";
pub const REPLY_LABEL: &str = "Resposta:";
pub const LINK_LABEL: &str = "Leia mais sobre essa técnica";
pub const SENDING_LABEL: &str = "Enviando...";

/// Renders turn cards for the terminal.
pub struct ChatRenderer {
    skin: MadSkin,
    /// Emit OSC 8 escape sequences so the link label is clickable.
    hyperlinks: bool,
}

impl ChatRenderer {
    /// Create a renderer; hyperlinks follow whether stdout gets colors.
    pub fn new() -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(termimad::crossterm::style::Color::Cyan);
        skin.inline_code
            .set_fg(termimad::crossterm::style::Color::Yellow);

        Self {
            skin,
            hyperlinks: console::colors_enabled(),
        }
    }

    /// Force hyperlink escapes on or off.
    pub fn with_hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    /// Render a stored turn, decoding its raw response.
    pub fn render_turn(&self, turn: &ChatTurn) -> String {
        self.render_card(&turn.user_text, &normalize(&turn.raw_response))
    }

    /// Render one card from the user's text and a normalized reply.
    pub fn render_card(&self, user_text: &str, reply: &NormalizedReply) -> String {
        let mut output = String::new();

        output.push_str(&format!("  {}\n", style(USER_LABEL).dim()));
        for line in user_text.trim().lines() {
            output.push_str(&format!("  {}\n", style(line).bold()));
        }

        output.push('\n');
        output.push_str(&format!("  {}\n", style(REPLY_LABEL).dim()));
        output.push_str(&self.render_markdown(&reply.resposta));

        if let Some(url) = &reply.url {
            output.push_str(&format!("\n  {}\n", self.render_link(url)));
        }

        if let Some(exercicio) = &reply.exercicio {
            output.push_str(&format!("\n  {}\n", style(exercicio).green()));
        }

        output
    }

    /// Render the link line: a clickable label where supported, plus the URL.
    pub fn render_link(&self, url: &str) -> String {
        if self.hyperlinks {
            format!(
                "\x1b]8;;{url}\x1b\\{}\x1b]8;;\x1b\\ {}",
                style(LINK_LABEL).blue().underlined(),
                style(url).dim()
            )
        } else {
            format!("{LINK_LABEL}: {url}")
        }
    }

    /// Render the stored raw body of a turn for inspection.
    pub fn render_raw(&self, turn: &ChatTurn) -> String {
        format!(
            "  {} {}\n  {}\n",
            style("raw").dim(),
            style(format!("({})", turn.raw_response.kind())).dim(),
            turn.raw_response
        )
    }

    /// Render reply prose through termimad, indented to match the card.
    fn render_markdown(&self, text: &str) -> String {
        let rendered = format!("{}", self.skin.term_text(text));
        let mut output = String::new();
        for line in rendered.lines() {
            output.push_str("  ");
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

impl Default for ChatRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Spinner shown while a message is in flight.
pub fn sending_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .template("  {spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message(SENDING_LABEL);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use tranquilize_core::chat::conversation::Conversation;
    use tranquilize_core::chat::service::{ChatService, SendOutcome};
    use tranquilize_core::client::support::SupportClient;
    use tranquilize_types::chat::DetectRequest;
    use tranquilize_types::error::ClientError;
    use tranquilize_types::reply::{RawResponse, FALLBACK_REPLY_TEXT};

    /// Answers every request with the same body.
    struct FixedClient(&'static str);

    impl SupportClient for FixedClient {
        fn name(&self) -> &str {
            "fixed"
        }

        fn endpoint(&self) -> &str {
            "memory://fixed"
        }

        async fn detect(&self, _request: &DetectRequest) -> Result<RawResponse, ClientError> {
            Ok(RawResponse::Text(self.0.to_string()))
        }
    }

    fn renderer() -> ChatRenderer {
        ChatRenderer::new().with_hyperlinks(false)
    }

    #[tokio::test]
    async fn test_anxious_message_renders_reply_and_exercise() {
        let service = ChatService::new(FixedClient(
            r#"{"resposta":"Respire fundo","exercicio":"4-7-8"}"#,
        ));
        let mut conversation = Conversation::new();

        let outcome = service.send(&mut conversation, "estou ansioso").await;
        assert_eq!(outcome, SendOutcome::Appended { index: 0 });

        let card = renderer().render_turn(&conversation.turns()[0]);
        assert!(card.contains(USER_LABEL));
        assert!(card.contains("estou ansioso"));
        assert!(card.contains(REPLY_LABEL));
        assert!(card.contains("Respire fundo"));
        assert!(card.contains("4-7-8"));
        assert!(!card.contains(LINK_LABEL));
    }

    #[test]
    fn test_card_with_link() {
        let reply = NormalizedReply {
            resposta: "Experimente a respiração quadrada".to_string(),
            url: Some("https://example.org/box".to_string()),
            exercicio: None,
        };
        let card = renderer().render_card("não consigo dormir", &reply);
        assert!(card.contains("Leia mais sobre essa técnica: https://example.org/box"));
    }

    #[test]
    fn test_hyperlink_escape() {
        let link = ChatRenderer::new()
            .with_hyperlinks(true)
            .render_link("https://example.org/box");
        assert!(link.starts_with("\x1b]8;;https://example.org/box\x1b\\"));
        assert!(link.contains("https://example.org/box"));
    }

    #[test]
    fn test_malformed_turn_renders_fallback() {
        let turn = ChatTurn::new("oi", RawResponse::Text("{\"resposta\":".to_string()));
        let card = renderer().render_turn(&turn);
        assert!(card.contains("oi"));
        assert!(card.contains(FALLBACK_REPLY_TEXT));
    }

    #[test]
    fn test_render_raw_shows_body() {
        let turn = ChatTurn::new("oi", RawResponse::Text("texto cru".to_string()));
        let raw = renderer().render_raw(&turn);
        assert!(raw.contains("text"));
        assert!(raw.contains("texto cru"));
    }
}
