use std::sync::Arc;

use axum::Router;

use crate::{routes::catalog_router::CatalogRouter, services::ServiceContext, state::AppState};

const BASE_PATH: &str = "/ingredients";

pub fn router(state: Arc<AppState>) -> Router {
    let services = ServiceContext::from_state(&state);
    CatalogRouter::new(services.ingredient(), BASE_PATH).router()
}
