use axum::{Router, middleware};

mod json_error;
mod panic;

pub use json_error::json_error_middleware;
pub use panic::catch_panic_layer;

/// JSON error bodies for everything the router emits, panics included.
pub fn with_error_handling(router: Router) -> Router {
    router
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
}
