use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

use super::{health, ingredients, item_ingredients, items};

pub const API_PREFIX: &str = "/api";

pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(health::router(state.clone()))
        .merge(ingredients::router(state.clone()))
        .merge(items::router(state.clone()))
        .merge(item_ingredients::router(state));

    Router::new().nest(API_PREFIX, api)
}
