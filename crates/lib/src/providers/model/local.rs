use crate::{
    errors::AssistError,
    providers::model::Invoker,
};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

// --- OpenAI-compatible request and response structures ---

#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage>,
    model: &'a str,
    temperature: f32,
    max_tokens: i32,
    stream: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize, Debug)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize, Debug)]
struct ChatChoice {
    message: ChatMessage,
}

// --- Local Provider implementation ---

/// A provider for a local or OpenAI-compatible chat completion API.
#[derive(Clone, Debug)]
pub struct LocalProvider {
    client: ReqwestClient,
    api_url: String,
    api_key: Option<String>,
}

impl LocalProvider {
    /// Creates a new `LocalProvider`.
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
}

#[async_trait]
impl Invoker for LocalProvider {
    async fn invoke(&self, prompt: &str, model_id: &str) -> Result<String, AssistError> {
        let messages = vec![ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        }];

        let request_body = ChatRequest {
            messages,
            model: model_id,
            temperature: 0.7,
            max_tokens: 2000,
            stream: false,
        };

        let mut request_builder = self.client.post(&self.api_url);
        if let Some(key) = &self.api_key {
            request_builder = request_builder.bearer_auth(key);
        }

        let response = request_builder
            .json(&request_body)
            .send()
            .await
            .map_err(AssistError::ModelRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AssistError::ModelApi(error_text));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(AssistError::ModelDeserialization)?;

        let raw_response = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(raw_response)
    }
}
