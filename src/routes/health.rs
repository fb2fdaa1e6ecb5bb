use std::sync::Arc;

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    error::AppError,
    response::{ApiResponse, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
}

async fn health(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    if let Err(err) = state.db.ping().await {
        tracing::warn!(error = %err, "database ping failed");
        return Err(AppError::unavailable(format!("database unavailable: {err}")));
    }
    ApiResponse::ok(HealthResponse {
        status: "ok",
        database: "up",
    })
}
