//! Product endpoints: list, get by id, insert, partial update.
//!
//! Reads return JSON rows; writes return a short plain-text confirmation.

use crate::error::ApiError;
use crate::models::{ActualizarProducto, NuevoProducto, ProductoConCategoria};
use crate::service::{self, RequestValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;

/// GET /producto: joined rows, ordered by id.
#[utoipa::path(
    get,
    path = "/producto",
    tag = "producto",
    responses((status = 200, description = "Listado de productos", body = [ProductoConCategoria]))
)]
pub async fn list_productos(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductoConCategoria>>, ApiError> {
    let productos = service::list_productos(&state.pool).await?;
    Ok(Json(productos))
}

/// GET /producto/:id: one joined row, 404 when the id is unknown.
#[utoipa::path(
    get,
    path = "/producto/{id}",
    tag = "producto",
    params(("id" = i64, Path, description = "Identificador del producto")),
    responses(
        (status = 200, description = "Producto con su categoría", body = ProductoConCategoria),
        (status = 404, description = "Producto no encontrado")
    )
)]
pub async fn get_producto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductoConCategoria>, ApiError> {
    let producto = service::get_producto(&state.pool, id).await?;
    Ok(Json(producto))
}

/// POST /producto: insert one product.
#[utoipa::path(
    post,
    path = "/producto",
    tag = "producto",
    request_body = NuevoProducto,
    responses(
        (status = 200, description = "Agregado correctamente", body = String),
        (status = 400, description = "Campo inválido")
    )
)]
pub async fn create_producto(
    State(state): State<AppState>,
    Json(body): Json<NuevoProducto>,
) -> Result<&'static str, ApiError> {
    RequestValidator::validate_nuevo(&body)?;
    service::create_producto(&state.pool, &body).await?;
    Ok("Agregado correctamente")
}

/// PUT /producto/:id: update only the supplied fields.
#[utoipa::path(
    put,
    path = "/producto/{id}",
    tag = "producto",
    params(("id" = i64, Path, description = "Identificador del producto")),
    request_body = ActualizarProducto,
    responses(
        (status = 200, description = "Actualizado con éxito", body = String),
        (status = 400, description = "Campo inválido, categoría desconocida o cuerpo vacío"),
        (status = 404, description = "Producto no encontrado")
    )
)]
pub async fn update_producto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ActualizarProducto>,
) -> Result<&'static str, ApiError> {
    RequestValidator::validate_cambios(&body)?;
    service::update_producto(&state.pool, id, &body).await?;
    Ok("Actualizado con éxito")
}
