use std::sync::Arc;

use axum::{Router, middleware::from_fn};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{
    middleware::{catch_panic_layer, json_error_middleware},
    routes::router,
    state::AppState,
};

/// The full HTTP stack. Trailing slashes are trimmed before routing.
pub type App = NormalizePath<Router>;

pub fn build_app(state: Arc<AppState>) -> App {
    let router = router(state)
        .layer(from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
