//! # Authoring Route Handlers
//!
//! This module contains the handlers that produce ready-to-paste artifacts:
//! LaTeX documents and formatted bibliographic references.

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
use textsmith::types::{DocumentKind, ReferenceKind, ReferenceStyle};
use tracing::info;

// --- API Payloads for Authoring Handlers ---

#[derive(Deserialize, Debug)]
pub struct LatexRequest {
    pub text: String,
    pub kind: DocumentKind,
    #[serde(default)]
    pub model: Option<String>,
}

/// The reference form. Which optional fields matter depends on `kind`; the
/// rest are ignored, mirroring the per-kind inputs of the form.
#[derive(Deserialize, Debug)]
pub struct ReferenceRequest {
    pub style: ReferenceStyle,
    pub kind: ReferenceKind,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    // Journal article / conference paper fields.
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub volume: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub pages: Option<String>,
    // Book fields.
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub place_published: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    // Website fields.
    #[serde(default)]
    pub website_name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub access_date: Option<String>,
    // Thesis/dissertation fields.
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree_type: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    // Report fields.
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub report_number: Option<String>,
}

impl ReferenceRequest {
    /// Assembles the ordered `(label, value)` pairs for the prompt: the
    /// common fields first, then the ones belonging to the reference kind.
    /// Blank values are passed through and skipped by the formatter.
    fn field_pairs(&self) -> Vec<(String, String)> {
        let opt = |value: &Option<String>| value.clone().unwrap_or_default();

        let mut fields = vec![
            ("Author(s)".to_string(), self.author.clone()),
            ("Title".to_string(), self.title.clone()),
            ("Year".to_string(), opt(&self.year)),
            ("DOI".to_string(), opt(&self.doi)),
            ("Notes".to_string(), opt(&self.notes)),
        ];

        match self.kind {
            ReferenceKind::JournalArticle | ReferenceKind::ConferencePaper => {
                fields.push(("Journal/Conference".to_string(), opt(&self.journal)));
                fields.push(("Volume".to_string(), opt(&self.volume)));
                fields.push(("Issue".to_string(), opt(&self.issue)));
                fields.push(("Pages".to_string(), opt(&self.pages)));
            }
            ReferenceKind::Book => {
                fields.push(("Publisher".to_string(), opt(&self.publisher)));
                fields.push(("Place Published".to_string(), opt(&self.place_published)));
                fields.push(("Edition".to_string(), opt(&self.edition)));
            }
            ReferenceKind::Website => {
                fields.push(("Website Name".to_string(), opt(&self.website_name)));
                fields.push(("URL".to_string(), opt(&self.url)));
                fields.push(("Date Accessed".to_string(), opt(&self.access_date)));
            }
            ReferenceKind::Thesis => {
                fields.push(("Institution".to_string(), opt(&self.institution)));
                fields.push(("Degree Type".to_string(), opt(&self.degree_type)));
                fields.push(("Department".to_string(), opt(&self.department)));
            }
            ReferenceKind::Report => {
                fields.push(("Organization".to_string(), opt(&self.organization)));
                fields.push(("Report Number".to_string(), opt(&self.report_number)));
                fields.push(("Place Published".to_string(), opt(&self.place_published)));
            }
        }

        fields
    }
}

// --- Authoring Handlers ---

/// Handler for the LaTeX generation endpoint.
pub async fn latex_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<LatexRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    ensure_not_empty(&payload.text, "Please enter some text to convert.")?;
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(model, kind = payload.kind.label(), "Received LaTeX request");

    let text = app_state
        .client
        .latex_document(&payload.text, payload.kind, model)
        .await?;

    let debug_info = json!({ "model": model, "kind": payload.kind });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}

/// Handler for the reference formatting endpoint.
pub async fn reference_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ReferenceRequest>,
) -> Result<Json<ApiResponse<PromptResponse>>, AppError> {
    if payload.author.trim().is_empty() || payload.title.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Please provide at least author and title information.".to_string(),
        ));
    }
    let model = resolve_model(payload.model.as_deref(), &app_state);
    info!(
        model,
        style = payload.style.label(),
        kind = payload.kind.label(),
        "Received reference request"
    );

    let fields = payload.field_pairs();
    let text = app_state
        .client
        .format_reference(payload.style, payload.kind, &fields, model)
        .await?;

    let debug_info = json!({
        "model": model,
        "style": payload.style,
        "kind": payload.kind,
        "field_count": fields.len(),
    });
    Ok(wrap_response(
        PromptResponse { text },
        debug_params,
        Some(debug_info),
    ))
}
