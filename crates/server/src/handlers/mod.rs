//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the
//! `textsmith-server`. The handlers are split into logical sub-modules
//! based on their feature area (analysis, tone, topics, authoring, admin).

// Sub-modules for different handler categories.
pub mod admin_handlers;
pub mod analysis_handlers;
pub mod authoring_handlers;
pub mod general;
pub mod tone_handlers;
pub mod topic_handlers;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use admin_handlers::*;
pub use analysis_handlers::*;
pub use authoring_handlers::*;
pub use general::*;
pub use tone_handlers::*;
pub use topic_handlers::*;

// Shared items used by multiple handler modules.
use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use serde_json::Value;

/// A shared helper function to wrap a successful result in the standard
/// `ApiResponse` format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Resolves the model for a request, falling back to the configured default.
pub(crate) fn resolve_model<'a>(requested: Option<&'a str>, app_state: &'a AppState) -> &'a str {
    requested.unwrap_or(&app_state.config.default_model)
}

/// Rejects blank free-text input before any model call is made.
pub(crate) fn ensure_not_empty(value: &str, message: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(message.to_string()));
    }
    Ok(())
}
