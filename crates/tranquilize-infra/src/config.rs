//! Client configuration loader for Tranquilize.
//!
//! Reads `config.toml` from the data directory (`~/.tranquilize/` in
//! production) and deserializes it into [`ClientConfig`]. Falls back to
//! defaults when the file is missing or malformed, then layers the
//! environment and command-line overrides on top.

use std::path::Path;

use reqwest::Url;

use tranquilize_types::config::ClientConfig;
use tranquilize_types::error::ConfigError;

use crate::filesystem::config_path;

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV: &str = "TRANQUILIZE_ENDPOINT";

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ClientConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ClientConfig::default()
        }
    }
}

/// Apply endpoint overrides and validate the result.
///
/// Priority:
/// 1. `--endpoint` flag
/// 2. `TRANQUILIZE_ENDPOINT` environment variable
/// 3. `endpoint` from `config.toml` (or the default)
pub fn apply_overrides(
    mut config: ClientConfig,
    env_endpoint: Option<String>,
    flag_endpoint: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let non_blank = |e: &String| !e.trim().is_empty();
    if let Some(endpoint) = flag_endpoint.filter(non_blank).or(env_endpoint.filter(non_blank)) {
        config.endpoint = endpoint.trim().to_string();
    }
    validate_endpoint(&config.endpoint)?;
    Ok(config)
}

/// Load the file config and resolve it against the environment and flag.
pub async fn resolve_client_config(
    data_dir: &Path,
    flag_endpoint: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let config = load_client_config(data_dir).await;
    apply_overrides(config, std::env::var(ENDPOINT_ENV).ok(), flag_endpoint)
}

/// The endpoint must be an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    match Url::parse(endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => Ok(()),
        _ => Err(ConfigError::InvalidEndpoint(endpoint.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tranquilize_types::config::DEFAULT_ENDPOINT;

    #[tokio::test]
    async fn load_client_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_client_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn load_client_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
endpoint = "http://127.0.0.1:8000/detectar"
request_timeout_secs = 15
"#,
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint, "http://127.0.0.1:8000/detectar");
        assert_eq!(config.request_timeout_secs, Some(15));
    }

    #[tokio::test]
    async fn load_client_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn apply_overrides_flag_beats_env() {
        let config = apply_overrides(
            ClientConfig::default(),
            Some("http://env.local/detectar".to_string()),
            Some("http://flag.local/detectar".to_string()),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://flag.local/detectar");
    }

    #[test]
    fn apply_overrides_env_beats_file() {
        let config = apply_overrides(
            ClientConfig::default(),
            Some("http://env.local/detectar".to_string()),
            None,
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://env.local/detectar");
    }

    #[test]
    fn apply_overrides_ignores_blank_values() {
        let config = apply_overrides(ClientConfig::default(), Some("  ".to_string()), None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn apply_overrides_blank_flag_falls_through_to_env() {
        let config = apply_overrides(
            ClientConfig::default(),
            Some("http://env.local/detectar".to_string()),
            Some("".to_string()),
        )
        .unwrap();
        assert_eq!(config.endpoint, "http://env.local/detectar");
    }

    #[test]
    fn apply_overrides_rejects_bad_endpoint() {
        let err = apply_overrides(ClientConfig::default(), None, Some("ftp://x.org".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEndpoint(_)));
        assert!(validate_endpoint("not a url").is_err());
        assert!(validate_endpoint(DEFAULT_ENDPOINT).is_ok());
    }
}
