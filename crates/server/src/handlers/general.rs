//! # General Route Handlers
//!
//! This module contains the general-purpose Axum handlers for the
//! `textsmith-server`: the root, the health check, and the static setup
//! guide.

use serde::{Deserialize, Serialize};

// --- Shared API Payloads ---

/// The response body for endpoints that return one block of generated text.
#[derive(Serialize, Deserialize)]
pub struct PromptResponse {
    pub text: String,
}

/// The static guide served at `/setup` for operators wiring up runtime
/// access.
const SETUP_GUIDE: &str = r#"## Troubleshooting model runtime access

If generate actions fail with an access-denied error, work through these
steps:

### 1. Verify the runtime region

Hosted model runtimes are only available in specific regions, commonly:
- US East (N. Virginia): `us-east-1`
- US West (Oregon): `us-west-2`
- Europe (Frankfurt): `eu-central-1`
- Asia Pacific (Tokyo): `ap-northeast-1`

Make sure the endpoint configured in `config.yml` points at one of them.

### 2. Enable model access

Most runtimes require you to request access per model line (Claude, Titan,
and so on) in the provider console before the first invocation succeeds.
Some models are approved instantly; others take a review pass.

### 3. Check endpoint permissions

The credentials behind the configured endpoint need permission to list
foundation models, invoke models, and (if storage probing is enabled) to
list, head, and create buckets.

### 4. Test outside the server

Confirm the endpoint works with a direct call before debugging the server:
list the model catalog with `GET {runtime}/foundation-models`, then invoke
a single model. If both succeed, the same credentials will work here.

### 5. Pick a model

Every generate endpoint accepts an optional `model` field; without it the
configured `default_model` is used. `GET /models` shows what the runtime
offers (or a static fallback list if discovery is unavailable).
"#;

// --- General-Purpose Handlers ---

/// The handler for the root (`/`) endpoint.
pub async fn root() -> &'static str {
    "textsmith server is running."
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the setup guide (`/setup`) endpoint.
pub async fn setup_guide_handler() -> &'static str {
    SETUP_GUIDE
}
