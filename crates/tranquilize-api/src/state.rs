//! Application state wiring the chat service together.
//!
//! AppState resolves configuration and pins the generic `ChatService` to the
//! boxed HTTP client used by every command.

use std::path::PathBuf;
use std::sync::Arc;

use tranquilize_core::chat::service::ChatService;
use tranquilize_core::client::box_client::BoxSupportClient;
use tranquilize_infra::config::resolve_client_config;
use tranquilize_infra::filesystem::resolve_data_dir;
use tranquilize_infra::http::create_client;
use tranquilize_types::config::ClientConfig;

/// Concrete type alias for the service generic pinned to the boxed client.
pub type ConcreteChatService = ChatService<BoxSupportClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: ClientConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve configuration and build the support client.
    pub async fn init(endpoint_override: Option<String>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = resolve_client_config(&data_dir, endpoint_override).await?;
        let client = create_client(&config)?;

        Ok(Self {
            chat_service: Arc::new(ChatService::new(client)),
            config,
            data_dir,
        })
    }
}
