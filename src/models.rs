//! Row and request-body types. Field names are the wire contract: JSON keys
//! and column names are the same Spanish identifiers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Row of `categorias`.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Categoria {
    pub id_categoria: i64,
    pub nombre_categoria: String,
    pub descripcion: Option<String>,
}

/// Joined product row returned by the list and get-by-id endpoints. The
/// category appears by name, not by id.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct ProductoConCategoria {
    pub id_producto: i64,
    pub nombre_producto: String,
    pub url_imagen: Option<String>,
    pub precio: f64,
    pub stock: i64,
    pub nombre_categoria: String,
}

/// Body of `POST /producto`. Description and image URL may be omitted; the
/// columns stay NULL until a later update fills them.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NuevoProducto {
    pub nuevo_nombre: String,
    pub nueva_descripcion: Option<String>,
    pub nueva_url_imagen: Option<String>,
    pub nuevo_precio_venta: f64,
    pub nuevo_stock_actual: i64,
    pub nuevo_id_categoria: i64,
}

/// Body of `PUT /producto/:id`. Only supplied fields are written; JSON `null`
/// counts as not supplied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ActualizarProducto {
    pub nombre_producto: Option<String>,
    pub descripcion: Option<String>,
    pub url_imagen: Option<String>,
    pub precio_venta: Option<f64>,
    pub stock_actual: Option<i64>,
    pub id_categoria: Option<i64>,
}
