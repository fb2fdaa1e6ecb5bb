use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::delete,
};

use crate::{
    error::AppError,
    response::{ApiResponse, ApiResult, MessageResponse},
    routes::catalog_router::INVALID_BODY,
    services::{
        ServiceContext,
        item_ingredient_service::{ItemIngredientInput, LINK_DELETED},
    },
    state::AppState,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/items-ingredients", delete(delete_link))
        .with_state(state)
}

async fn delete_link(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ItemIngredientInput>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(input) = payload.map_err(|_| AppError::bad_request(INVALID_BODY))?;
    ServiceContext::from_state(&state)
        .item_ingredient()
        .delete(input)
        .await?;
    ApiResponse::message(StatusCode::OK, LINK_DELETED)
}
