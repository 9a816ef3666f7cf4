//! # Analysis Route Handlers
//!
//! This module contains the handlers for own-text analysis and text
//! evaluation, the two endpoints whose responses are assembled by splitting
//! one model answer into marked sections.

use super::{
    ensure_not_empty, resolve_model, wrap_response, ApiResponse, AppError, AppState, DebugParams,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use textsmith::types::{AnalysisReport, EvaluationReport};
use tracing::info;

// --- API Payloads for Analysis Handlers ---

#[derive(Deserialize, Debug)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct EvaluateRequest {
    pub text: String,
    #[serde(default)]
    pub model: Option<String>,
}

// --- Analysis Handlers ---

/// Handler for the own-text analysis endpoint.
///
/// Generates every document part in turn, then asks for corrections and
/// splits that response into the fixed correction sections.
pub async fn analyze_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<ApiResponse<AnalysisReport>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to analyze.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, "Received analysis request");

    let report = app_state.client.analyze_text(&payload.text, model).await?;

    let debug_info = json!({
        "model": model,
        "section_count": report.sections.len(),
    });
    Ok(wrap_response(report, debug_params, Some(debug_info)))
}

/// Handler for the text evaluation endpoint.
///
/// One model call, graded per dimension, split on the evaluation markers.
pub async fn evaluate_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<EvaluationReport>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to evaluate.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, "Received evaluation request");

    let report = app_state.client.evaluate_text(&payload.text, model).await?;

    let debug_info = json!({ "model": model });
    Ok(wrap_response(report, debug_params, Some(debug_info)))
}
