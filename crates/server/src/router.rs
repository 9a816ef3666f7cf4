use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/setup", get(handlers::setup_guide_handler))
        .route("/analyze", post(handlers::analyze_handler))
        .route("/evaluate", post(handlers::evaluate_handler))
        .route("/tone", post(handlers::tone_handler))
        .route("/tone/section", post(handlers::tone_section_handler))
        .route("/tone/review", post(handlers::tone_review_handler))
        .route("/topics/hypotheses", post(handlers::hypotheses_handler))
        .route("/topics/briefing", post(handlers::briefing_handler))
        .route("/latex", post(handlers::latex_handler))
        .route("/reference", post(handlers::reference_handler))
        .route("/models", get(handlers::models_handler))
        .route(
            "/storage/bucket",
            get(handlers::bucket_status_handler).post(handlers::bucket_create_handler),
        )
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
