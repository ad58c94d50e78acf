//! Catalog routes: the root greeting plus category and product endpoints.

use crate::handlers::{categoria, producto};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Greeting at the API root.
async fn raiz() -> &'static str {
    "Api para los productos de Ease-Tec"
}

pub fn catalogo_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(raiz))
        .route("/categoria", get(categoria::list_categorias))
        .route(
            "/producto",
            get(producto::list_productos).post(producto::create_producto),
        )
        .route(
            "/producto/:id",
            get(producto::get_producto).put(producto::update_producto),
        )
        .with_state(state)
}
