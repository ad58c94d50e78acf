//! OpenAPI document for the catalog API, served at `GET /swagger/json`.

use crate::handlers;
use crate::models::{ActualizarProducto, Categoria, NuevoProducto, ProductoConCategoria};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Ease-Tec API",
        description = "Api para los productos de Ease-Tec"
    ),
    paths(
        handlers::categoria::list_categorias,
        handlers::producto::list_productos,
        handlers::producto::get_producto,
        handlers::producto::create_producto,
        handlers::producto::update_producto,
    ),
    components(schemas(Categoria, ProductoConCategoria, NuevoProducto, ActualizarProducto)),
    tags(
        (name = "categoria", description = "Categorías del catálogo"),
        (name = "producto", description = "Productos del catálogo")
    )
)]
pub struct ApiDoc;
