//! # Tone Route Handlers
//!
//! This module contains the handlers for the tone transform feature: the
//! full transform, per-section regeneration, and the free-form review pass.

use super::{
    ensure_not_empty, resolve_model, wrap_response, ApiResponse, AppError, AppState, DebugParams,
    PromptResponse,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use textsmith::types::{DocumentPart, ToneOptions};
use tracing::info;

// --- API Payloads for Tone Handlers ---

#[derive(Deserialize, Debug)]
pub struct ToneRequest {
    pub text: String,
    #[serde(flatten)]
    pub options: ToneOptions,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ToneSectionRequest {
    pub text: String,
    pub part: DocumentPart,
    #[serde(flatten)]
    pub options: ToneOptions,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ToneReviewRequest {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

// --- Tone Handlers ---

/// Handler for the full tone transform endpoint.
pub async fn tone_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ToneRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to transform.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, tone = payload.options.tone.label(), "Received tone transform request");

    let text = app_state
        .client
        .transform_tone(&payload.text, &payload.options, model)
        .await?;

    let debug_info = json!({ "model": model, "options": payload.options });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}

/// Handler for regenerating a single document part of a transform.
pub async fn tone_section_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ToneSectionRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to transform.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(
        model,
        part = payload.part.label(),
        "Received tone section request"
    );

    let text = app_state
        .client
        .transform_tone_section(&payload.text, payload.part, &payload.options, model)
        .await?;

    let debug_info = json!({ "model": model, "part": payload.part });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}

/// Handler for the free-form tone review endpoint.
pub async fn tone_review_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ToneReviewRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to review.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, "Received tone review request");

    let text = app_state.client.review_tone(&payload.text, model).await?;

    let debug_info = json!({ "model": model });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}
