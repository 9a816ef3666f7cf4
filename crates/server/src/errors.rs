use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use textsmith::AssistError;
use tracing::error;

/// Appended to inference failures so the surfaced message stays actionable.
const MODEL_TROUBLESHOOTING: &str = "\n\nTroubleshooting tips:\n\
    1. Check if you have access to the selected model\n\
    2. Verify the configured runtime endpoint and credentials\n\
    3. Make sure the model runtime is available in your region";

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within
/// the server, allowing them to be converted into appropriate HTTP responses.
pub enum AppError {
    /// Errors originating from the `textsmith` library.
    Assist(AssistError),
    /// Invalid request input.
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

/// Conversion from `AssistError` to `AppError`.
impl From<AssistError> for AppError {
    fn from(err: AssistError) -> Self {
        AppError::Assist(err)
    }
}

/// Conversion from `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AppError::Assist(err) => {
                // Log the original error for debugging purposes
                error!("AssistError: {:?}", err);
                match err {
                    AssistError::MissingInvoker => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    AssistError::ModelRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Error calling model: {e}{MODEL_TROUBLESHOOTING}"),
                    ),
                    AssistError::ModelDeserialization(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!(
                            "Error calling model: unreadable response: {e}{MODEL_TROUBLESHOOTING}"
                        ),
                    ),
                    AssistError::ModelApi(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Error calling model: {e}{MODEL_TROUBLESHOOTING}"),
                    ),
                    AssistError::StorageRequest(e) => (
                        StatusCode::BAD_GATEWAY,
                        format!("Storage request failed: {e}"),
                    ),
                    AssistError::StorageApi { bucket, status } => (
                        StatusCode::BAD_GATEWAY,
                        format!("Storage endpoint returned status {status} for bucket `{bucket}`"),
                    ),
                    AssistError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                    AssistError::JsonSerialization(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to serialize result: {e}"),
                    ),
                    AssistError::Regex(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Internal regex error: {e}"),
                    ),
                }
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
