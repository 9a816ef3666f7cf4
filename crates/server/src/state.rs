//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the
//! logic for building it at startup. The `AppState` holds all shared
//! resources: the configuration, the assistant client, and the catalog and
//! bucket probes, making them accessible to all request handlers.

use crate::config::AppConfig;
use std::sync::Arc;
use textsmith::{
    providers::{
        catalog::ModelCatalog,
        model::{bedrock::BedrockProvider, local::LocalProvider, Invoker},
        storage::BucketClient,
    },
    AssistantClient, AssistantClientBuilder,
};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration, loaded from `config.yml`.
    pub config: Arc<AppConfig>,
    /// The assistant client every generate action goes through.
    pub client: Arc<AssistantClient>,
    /// The model discovery client.
    pub catalog: Arc<ModelCatalog>,
    /// The artifact bucket probe, when storage is configured.
    pub bucket: Option<Arc<BucketClient>>,
}

/// Builds the shared application state from the configuration.
///
/// This instantiates the inference provider named in the `provider` section,
/// wraps it in an `AssistantClient`, and sets up the catalog and optional
/// bucket clients.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let invoker: Box<dyn Invoker> = match config.provider.kind.as_str() {
        "bedrock" => Box::new(BedrockProvider::new(
            config.provider.api_url.clone(),
            config.provider.api_key.clone(),
        )?),
        "local" => Box::new(LocalProvider::new(
            config.provider.api_url.clone(),
            config.provider.api_key.clone(),
        )?),
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported inference provider kind '{other}'"
            ));
        }
    };

    let client = AssistantClientBuilder::new().invoker(invoker).build()?;

    let catalog = ModelCatalog::new(config.catalog.as_ref().and_then(|c| c.api_url.clone()))?;

    let bucket = match &config.storage {
        Some(storage) => Some(Arc::new(BucketClient::new(
            storage.api_url.clone(),
            storage.bucket.clone(),
            storage.region.clone(),
        )?)),
        None => None,
    };

    Ok(AppState {
        config: Arc::new(config),
        client: Arc::new(client),
        catalog: Arc::new(catalog),
        bucket,
    })
}
