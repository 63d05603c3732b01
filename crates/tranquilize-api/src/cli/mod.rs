//! CLI command definitions for the `tranq` binary.
//!
//! Uses clap derive macros for argument parsing. Running `tranq` with no
//! subcommand opens the interactive chat.

pub mod chat;
pub mod config;
pub mod normalize;
pub mod send;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Talk to the Tranquilize emotional-support assistant from your terminal.
#[derive(Parser)]
#[command(name = "tranq", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Support endpoint URL (overrides config.toml and TRANQUILIZE_ENDPOINT).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (default).
    Chat,

    /// Send a single message and print the reply.
    Send {
        /// What you are feeling.
        text: String,
    },

    /// Decode a raw endpoint response offline and show how it would render.
    Normalize {
        /// Raw response body. Read from stdin when omitted.
        raw: Option<String>,
    },

    /// Show the effective configuration.
    Config,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_chat() {
        let cli = Cli::try_parse_from(["tranq"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_send_with_global_flags() {
        let cli = Cli::try_parse_from([
            "tranq",
            "send",
            "estou ansioso",
            "--json",
            "--endpoint",
            "http://localhost:8000/detectar",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.endpoint.as_deref(), Some("http://localhost:8000/detectar"));
        match cli.command {
            Some(Commands::Send { text }) => assert_eq!(text, "estou ansioso"),
            _ => panic!("expected send command"),
        }
    }
}
