//! Tranquilize terminal chat client entry point.
//!
//! Binary name: `tranq`
//!
//! Parses CLI arguments, sets up tracing, resolves configuration, then
//! dispatches to the chat loop or a one-shot command.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use tranquilize_observe::tracing_setup::{init_tracing, shutdown_tracing, verbosity_filter};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(verbosity_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Chat);

    match command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "tranq", &mut std::io::stdout());
        }
        // Offline: decodes a captured body without touching the endpoint.
        Commands::Normalize { raw } => cli::normalize::normalize_raw(raw, cli.json).await?,
        Commands::Chat => {
            let state = AppState::init(cli.endpoint).await?;
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }
        Commands::Send { text } => {
            let state = AppState::init(cli.endpoint).await?;
            cli::send::send_message(&state, &text, cli.json).await?;
        }
        Commands::Config => {
            let state = AppState::init(cli.endpoint).await?;
            cli::config::show_config(&state, cli.json).await?;
        }
    }

    Ok(())
}
