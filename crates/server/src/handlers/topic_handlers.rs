//! # Topic Explorer Route Handlers
//!
//! This module contains the handlers for topic exploration: generating
//! hypothesis options and building the statistics/references/outline
//! briefing for a chosen hypothesis.

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
use textsmith::types::TopicBriefing;
use tracing::info;

// --- API Payloads for Topic Handlers ---

#[derive(Deserialize, Debug)]
pub struct HypothesesRequest {
    pub topic: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct BriefingRequest {
    pub hypothesis: String,
    #[serde(default)]
    pub model: Option<String>,
}

// --- Topic Handlers ---

/// Handler for generating numbered hypothesis options for a topic.
pub async fn hypotheses_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<HypothesesRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    ensure_not_empty(&payload.topic, "Please enter a topic to explore.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, "Received hypothesis options request");

    let text = app_state
        .client
        .hypothesis_options(&payload.topic, model)
        .await?;

    let debug_info = json!({ "model": model, "topic": payload.topic });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}

/// Handler for the hypothesis briefing endpoint.
///
/// Runs the statistics, references, and outline calls in sequence and
/// returns all three together.
pub async fn briefing_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<BriefingRequest>,
) -> Result<Json<ApiResponse<TopicBriefing>>, AppError> {
    ensure_not_empty(&payload.hypothesis, "Please select a hypothesis first.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, "Received topic briefing request");

    let briefing = app_state
        .client
        .topic_briefing(&payload.hypothesis, model)
        .await?;

    let debug_info = json!({ "model": model });
    Ok(wrap_response(briefing, debug_params, Some(debug_info)))
}
