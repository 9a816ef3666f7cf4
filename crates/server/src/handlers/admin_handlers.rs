//! # Admin Route Handlers
//!
//! This module contains the operational endpoints: model discovery and the
//! artifact bucket probe.

use super::{wrap_response, ApiResponse, AppError, AppState, DebugParams};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use serde_json::json;
use textsmith::providers::storage::{BucketClient, BucketStatus};
use tracing::info;

// --- API Payloads for Admin Handlers ---

/// The response body for the `/models` endpoint.
#[derive(Serialize)]
pub struct ModelListResponse {
    pub models: Vec<String>,
}

/// The response body for the bucket status endpoint.
#[derive(Serialize)]
pub struct BucketStatusResponse {
    pub bucket: String,
    pub status: BucketStatus,
}

/// The response body for the bucket creation endpoint.
#[derive(Serialize)]
pub struct BucketCreateResponse {
    pub message: String,
}

// --- Admin Handlers ---

/// Handler for listing the models the runtime offers.
///
/// Discovery failures never surface here; the static fallback list is
/// returned instead.
pub async fn models_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<ModelListResponse>>, AppError> {
    let models = app_state.catalog.list_models().await;
    info!(count = models.len(), "Listed available models");

    let debug_info = json!({ "count": models.len() });
    Ok(wrap_response(
        ModelListResponse { models },
        debug_params,
        Some(debug_info),
    ))
}

/// Resolves the bucket client or reports that storage is not configured.
fn require_bucket(app_state: &AppState) -> Result<&BucketClient, AppError> {
    app_state
        .bucket
        .as_deref()
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Storage is not configured")))
}

/// Handler for probing the artifact bucket.
pub async fn bucket_status_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<BucketStatusResponse>>, AppError> {
    let bucket = require_bucket(&app_state)?;
    let status = bucket.status().await?;
    info!(bucket = bucket.bucket(), ?status, "Probed artifact bucket");

    Ok(wrap_response(
        BucketStatusResponse {
            bucket: bucket.bucket().to_string(),
            status,
        },
        debug_params,
        None,
    ))
}

/// Handler for creating the artifact bucket.
pub async fn bucket_create_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
) -> Result<Json<ApiResponse<BucketCreateResponse>>, AppError> {
    let bucket = require_bucket(&app_state)?;
    bucket.create().await?;
    info!(bucket = bucket.bucket(), "Created artifact bucket");

    Ok(wrap_response(
        BucketCreateResponse {
            message: format!("Bucket `{}` created successfully", bucket.bucket()),
        },
        debug_params,
        None,
    ))
}
