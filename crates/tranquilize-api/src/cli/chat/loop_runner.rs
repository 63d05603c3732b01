//! Main chat loop orchestration.
//!
//! The loop owns the session's `Conversation` and passes it down to the
//! service on every send. It shows the banner, reads input, runs slash
//! commands, and renders each new turn.

use console::style;
use tracing::info;

use tranquilize_core::chat::conversation::Conversation;
use tranquilize_core::chat::service::SendOutcome;
use tranquilize_core::client::support::SupportClient;

use crate::state::AppState;

use super::banner::{print_empty_state, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::{sending_spinner, ChatRenderer};

/// Run the interactive chat loop against the configured endpoint.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let service = &state.chat_service;
    let renderer = ChatRenderer::new();
    let mut conversation = Conversation::new();

    print_welcome_banner(service.client().endpoint());
    print_empty_state();

    let prompt = format!("  {} ", style("Você >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(),
                        ChatCommand::Clear => chat_input.clear(),
                        ChatCommand::Exit => {
                            println!("\n  {}", style("Session ended.").dim());
                            break;
                        }
                        ChatCommand::History => print_history(&renderer, &conversation),
                        ChatCommand::Raw => match conversation.last() {
                            Some(turn) => println!("\n{}", renderer.render_raw(turn)),
                            None => print_empty_state(),
                        },
                        ChatCommand::Unknown(name) => {
                            println!(
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            );
                        }
                    }
                    continue;
                }

                let spinner = sending_spinner();
                let outcome = service.send(&mut conversation, &text).await;
                spinner.finish_and_clear();

                match outcome {
                    SendOutcome::Appended { index } => {
                        if let Some(turn) = conversation.get(index) {
                            println!("\n{}", renderer.render_turn(turn));
                        }
                    }
                    SendOutcome::Busy => {
                        println!("\n  {}", style("Still sending the previous message.").dim());
                    }
                    // Failures are already logged; the turn is simply not shown.
                    SendOutcome::Dropped | SendOutcome::Skipped => {}
                }
            }
        }
    }

    chat_input.flush();
    info!(turns = conversation.len(), "Chat session closed");
    Ok(())
}

/// Re-render every turn from its stored raw response.
fn print_history(renderer: &ChatRenderer, conversation: &Conversation) {
    if conversation.is_empty() {
        println!();
        print_empty_state();
        return;
    }

    println!();
    for (position, turn) in conversation.iter().enumerate() {
        println!(
            "  {}",
            style(format!("#{} {}", position + 1, turn.sent_at.format("%H:%M:%S"))).dim()
        );
        println!("{}", renderer.render_turn(turn));
    }
}
