//! HTTP transport for the analysis engine.
//!
//! `POST /analyze`, `POST /generate-tasks` and `GET /health`, JSON in and out.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info_span, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::brain::{AnalysisResult, JournalAnalyzer, TaskRecommendation};
use crate::error::AppError;

// Application state
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<JournalAnalyzer>,
}

/// Request body shared by both endpoints
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JournalRequest {
    #[validate(length(min = 1, message = "text must not be empty"))]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/analyze", post(analyze))
        .route("/generate-tasks", post(generate_tasks))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// POST /analyze
async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<JournalRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    req.validate()?;

    let span = info_span!(
        "analyze",
        request_id = %Uuid::new_v4(),
        text_chars = req.text.chars().count()
    );
    let result = state.analyzer.analyze(&req.text).instrument(span).await?;

    Ok(Json(result))
}

/// POST /generate-tasks
async fn generate_tasks(
    State(state): State<AppState>,
    Json(req): Json<JournalRequest>,
) -> Result<Json<TaskRecommendation>, AppError> {
    req.validate()?;

    let span = info_span!(
        "generate_tasks",
        request_id = %Uuid::new_v4(),
        text_chars = req.text.chars().count()
    );
    let recommendation = state
        .analyzer
        .generate_tasks(&req.text)
        .instrument(span)
        .await?;

    Ok(Json(recommendation))
}
