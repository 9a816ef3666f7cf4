use thiserror::Error;

/// Custom error types for the library.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to the model runtime: {0}")]
    ModelRequest(reqwest::Error),
    #[error("Failed to deserialize the model runtime response: {0}")]
    ModelDeserialization(reqwest::Error),
    #[error("The model runtime returned an error: {0}")]
    ModelApi(String),
    #[error("Failed to send request to the storage endpoint: {0}")]
    StorageRequest(reqwest::Error),
    #[error("The storage endpoint returned status {status} for bucket `{bucket}`")]
    StorageApi { bucket: String, status: u16 },
    #[error("An inference provider is required")]
    MissingInvoker,
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
