//! Welcome banner display for chat sessions.
//!
//! Prints the product header, the legal notice, and the endpoint in use
//! when a chat session starts.

use console::style;

pub const PRODUCT_NAME: &str = "Tranquilize AI";
pub const TAGLINE: &str = "Uma IA para suporte emocional.";
pub const DISCLAIMER: &str = "O Tranquilize AI é um assistente experimental. Ele não substitui \
profissionais de saúde mental. Ele ajuda com técnicas de alívio mental comprovadas. Se você \
estiver enfrentando dificuldades emocionais severas, procure ajuda profissional.";
pub const EMPTY_STATE: &str = "Digite o que está sentindo abaixo e receba uma ajuda.";

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(endpoint: &str) {
    println!();
    println!("  {}", style(PRODUCT_NAME).cyan().bold());
    println!("  {}", style(TAGLINE).dim());
    println!();
    println!("  {} {}", style("⚠").red().bold(), style(DISCLAIMER).red());
    println!();
    println!("  {}  {}", style("Endpoint:").bold(), style(endpoint).dim());
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the hint shown while the conversation has no turns.
pub fn print_empty_state() {
    println!("  {}", style(EMPTY_STATE).dim());
    println!();
}
