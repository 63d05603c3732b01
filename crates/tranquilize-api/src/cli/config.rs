//! `tranq config` -- print the effective configuration.

use console::style;

use tranquilize_infra::filesystem::config_path;

use crate::state::AppState;

/// Print where requests go and where the configuration came from.
pub async fn show_config(state: &AppState, json: bool) -> anyhow::Result<()> {
    let path = config_path(&state.data_dir);
    let file_exists = tokio::fs::try_exists(&path).await.unwrap_or(false);

    if json {
        let view = serde_json::json!({
            "endpoint": state.config.endpoint,
            "request_timeout_secs": state.config.request_timeout_secs,
            "data_dir": state.data_dir.display().to_string(),
            "config_file": path.display().to_string(),
            "config_file_exists": file_exists,
        });
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let timeout = match state.config.request_timeout_secs {
        Some(secs) => format!("{secs}s"),
        None => "none".to_string(),
    };
    let file_note = if file_exists { "" } else { " (not found, using defaults)" };

    println!();
    println!("  {}   {}", style("Endpoint:").bold(), style(&state.config.endpoint).cyan());
    println!("  {}    {}", style("Timeout:").bold(), timeout);
    println!(
        "  {} {}{}",
        style("Config file:").bold(),
        path.display(),
        style(file_note).dim()
    );
    println!();

    Ok(())
}
