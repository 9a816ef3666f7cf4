use crate::{
    errors::AssistError,
    providers::model::{Invoker, ModelFamily},
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.9;
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const NO_CONTENT: &str = "No content returned";

// --- Family-specific request and response structures ---

#[derive(Serialize)]
struct ClaudeRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<ClaudeMessage<'a>>,
}

#[derive(Serialize)]
struct ClaudeMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize, Debug)]
struct ClaudeResponse {
    #[serde(default)]
    content: Vec<ClaudeContent>,
}

#[derive(Deserialize, Debug)]
struct ClaudeContent {
    text: Option<String>,
}

#[derive(Serialize)]
struct TitanRequest<'a> {
    #[serde(rename = "inputText")]
    input_text: &'a str,
    #[serde(rename = "textGenerationConfig")]
    text_generation_config: TitanConfig,
}

#[derive(Serialize)]
struct TitanConfig {
    #[serde(rename = "maxTokenCount")]
    max_token_count: u32,
    temperature: f32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Deserialize, Debug)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Deserialize, Debug)]
struct TitanResult {
    #[serde(rename = "outputText")]
    output_text: Option<String>,
}

#[derive(Serialize)]
struct LlamaRequest<'a> {
    prompt: &'a str,
    max_gen_len: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct GenericRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}

// --- Bedrock Provider implementation ---

/// A provider for a Bedrock-style model runtime.
///
/// The runtime multiplexes several model families behind one endpoint, so
/// the request body and the response field holding the generated text are
/// chosen per call from the model identifier. Credential management is the
/// endpoint's concern; an optional bearer key is supported.
#[derive(Clone, Debug)]
pub struct BedrockProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl BedrockProvider {
    /// Creates a new `BedrockProvider` for the given runtime endpoint.
    pub fn new(api_url: String, api_key: Option<String>) -> Result<Self, AssistError> {
        let client = ReqwestClient::builder()
            .build()
            .map_err(AssistError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }

    /// Shapes the request body for the family the model belongs to.
    fn request_body(family: ModelFamily, prompt: &str) -> Result<Value, AssistError> {
        let body = match family {
            ModelFamily::Claude => serde_json::to_value(ClaudeRequest {
                anthropic_version: ANTHROPIC_VERSION,
                max_tokens: MAX_TOKENS,
                messages: vec![ClaudeMessage {
                    role: "user",
                    content: prompt,
                }],
            })?,
            ModelFamily::Titan => serde_json::to_value(TitanRequest {
                input_text: prompt,
                text_generation_config: TitanConfig {
                    max_token_count: MAX_TOKENS,
                    temperature: TEMPERATURE,
                    top_p: TOP_P,
                },
            })?,
            ModelFamily::Llama => serde_json::to_value(LlamaRequest {
                prompt,
                max_gen_len: MAX_TOKENS,
                temperature: TEMPERATURE,
                top_p: TOP_P,
            })?,
            ModelFamily::Generic => serde_json::to_value(GenericRequest {
                prompt,
                max_tokens: MAX_TOKENS,
            })?,
        };
        Ok(body)
    }

    /// Extracts the generated text from a response body.
    ///
    /// Claude and Titan have known shapes. Everything else gets a
    /// best-effort lookup of common field names; when none match, the body
    /// itself is returned inside a diagnostic string rather than an error.
    fn extract_text(family: ModelFamily, body: Value) -> Result<String, AssistError> {
        match family {
            ModelFamily::Claude => {
                let parsed: ClaudeResponse = serde_json::from_value(body)?;
                Ok(parsed
                    .content
                    .into_iter()
                    .next()
                    .and_then(|c| c.text)
                    .unwrap_or_else(|| NO_CONTENT.to_string()))
            }
            ModelFamily::Titan => {
                let parsed: TitanResponse = serde_json::from_value(body)?;
                Ok(parsed
                    .results
                    .into_iter()
                    .next()
                    .and_then(|r| r.output_text)
                    .unwrap_or_else(|| NO_CONTENT.to_string()))
            }
            ModelFamily::Llama | ModelFamily::Generic => {
                for key in ["generated_text", "completion", "generation"] {
                    if let Some(text) = body.get(key).and_then(Value::as_str) {
                        return Ok(text.to_string());
                    }
                }
                Ok(format!(
                    "Response received but format unknown: {}",
                    serde_json::to_string_pretty(&body)?
                ))
            }
        }
    }
}

#[async_trait]
impl Invoker for BedrockProvider {
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<String, AssistError> {
        let family = ModelFamily::from_model_id(model_id);
        let request_body = Self::request_body(family, prompt)?;
        let url = format!(
            "{}/model/{model_id}/invoke",
            self.api_url.trim_end_matches('/')
        );

        let mut request_builder = self.client.post(&url).json(&request_body);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .send()
            .await
            .map_err(AssistError::ModelRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssistError::ModelApi(error_text));
        }

        let body: Value = response
            .json()
            .await
            .map_err(AssistError::ModelDeserialization)?;

        Self::extract_text(family, body)
    }
}
