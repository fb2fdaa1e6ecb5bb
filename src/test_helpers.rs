use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig, middleware::with_error_handling, routes::router, state::AppState,
};

/// The full HTTP stack around `db`, usually a `MockDatabase` connection.
pub fn test_router(db: DatabaseConnection) -> Router {
    let state = AppState::new(AppConfig::default(), db);
    with_error_handling(router(Arc::clone(&state)))
}
