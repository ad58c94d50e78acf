//! Router assembly: catalog routes plus common operational routes, wrapped in
//! permissive CORS and a request body limit.

mod catalogo;
mod common;

pub use catalogo::catalogo_routes;
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The full application router.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(catalogo_routes(state.clone()))
        .merge(common_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(cors)
}
