use crate::errors::AssistError;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use tracing::warn;

/// Model identifiers offered when discovery is unavailable.
pub const FALLBACK_MODELS: &[&str] = &[
    "amazon.titan-text-express-v1",
    "anthropic.claude-3-haiku-20240307-v1",
    "anthropic.claude-3-sonnet-20240229-v1",
    "anthropic.claude-instant-v1",
    "ai21.j2-ultra-v1",
    "meta.llama2-13b-chat-v1",
];

#[derive(Deserialize, Debug)]
struct CatalogResponse {
    #[serde(rename = "modelSummaries", default)]
    model_summaries: Vec<ModelSummary>,
}

#[derive(Deserialize, Debug)]
struct ModelSummary {
    #[serde(rename = "modelId")]
    model_id: Option<String>,
}

/// A client for the model runtime's discovery endpoint.
///
/// Discovery is best-effort: when no catalog URL is configured, the request
/// fails, or the catalog comes back empty, the static fallback list is
/// returned instead.
#[derive(Clone, Debug)]
pub struct ModelCatalog {
    client: ReqwestClient,
    api_url: Option<String>,
}

impl ModelCatalog {
    /// Creates a new `ModelCatalog`. Passing `None` disables discovery.
    pub fn new(api_url: Option<String>) -> Result<Self, AssistError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(AssistError::ReqwestClientBuild)?;
        Ok(Self { client, api_url })
    }

    /// Lists the model identifiers the runtime offers.
    pub async fn list_models(&self) -> Vec<String> {
        let Some(api_url) = &self.api_url else {
            return Self::fallback();
        };
        match self.fetch(api_url).await {
            Ok(models) if !models.is_empty() => models,
            Ok(_) => {
                warn!("Model catalog returned no entries, using the fallback list");
                Self::fallback()
            }
            Err(e) => {
                warn!("Model catalog request failed ({e}), using the fallback list");
                Self::fallback()
            }
        }
    }

    async fn fetch(&self, api_url: &str) -> Result<Vec<String>, AssistError> {
        let url = format!("{}/foundation-models", api_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(AssistError::ModelRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssistError::ModelApi(error_text));
        }

        let catalog: CatalogResponse = response
            .json()
            .await
            .map_err(AssistError::ModelDeserialization)?;

        Ok(catalog
            .model_summaries
            .into_iter()
            .filter_map(|summary| summary.model_id)
            .collect())
    }

    fn fallback() -> Vec<String> {
        FALLBACK_MODELS.iter().map(|m| m.to_string()).collect()
    }
}
