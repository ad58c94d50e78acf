//! One function per catalog operation: run the query, map rows, raise typed
//! errors. Handlers never touch SQL directly.

use crate::error::ApiError;
use crate::models::{ActualizarProducto, Categoria, NuevoProducto, ProductoConCategoria};
use crate::sql::{self, SqlParam};
use sqlx::any::AnyArguments;
use sqlx::query::Query;
use sqlx::{Any, AnyPool};

pub async fn list_categorias(pool: &AnyPool) -> Result<Vec<Categoria>, ApiError> {
    tracing::debug!(sql = %sql::SELECT_CATEGORIAS, "query");
    let categorias = sqlx::query_as::<_, Categoria>(sql::SELECT_CATEGORIAS)
        .fetch_all(pool)
        .await?;
    Ok(categorias)
}

pub async fn list_productos(pool: &AnyPool) -> Result<Vec<ProductoConCategoria>, ApiError> {
    tracing::debug!(sql = %sql::SELECT_PRODUCTOS, "query");
    let productos = sqlx::query_as::<_, ProductoConCategoria>(sql::SELECT_PRODUCTOS)
        .fetch_all(pool)
        .await?;
    Ok(productos)
}

pub async fn get_producto(pool: &AnyPool, id: i64) -> Result<ProductoConCategoria, ApiError> {
    tracing::debug!(sql = %sql::SELECT_PRODUCTO_POR_ID, id, "query");
    sqlx::query_as::<_, ProductoConCategoria>(sql::SELECT_PRODUCTO_POR_ID)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(ApiError::ProductNotFound)
}

pub async fn create_producto(pool: &AnyPool, nuevo: &NuevoProducto) -> Result<(), ApiError> {
    tracing::debug!(sql = %sql::INSERT_PRODUCTO, "query");
    sqlx::query(sql::INSERT_PRODUCTO)
        .bind(nuevo.nuevo_nombre.as_str())
        .bind(nuevo.nueva_descripcion.as_deref())
        .bind(nuevo.nueva_url_imagen.as_deref())
        .bind(nuevo.nuevo_precio_venta)
        .bind(nuevo.nuevo_stock_actual)
        .bind(nuevo.nuevo_id_categoria)
        .execute(pool)
        .await?;
    Ok(())
}

/// Partial update: the product must exist, a supplied category must exist,
/// and at least one field must be present. Exactly the supplied fields are
/// written, in a single statement.
pub async fn update_producto(
    pool: &AnyPool,
    id: i64,
    cambios: &ActualizarProducto,
) -> Result<(), ApiError> {
    let producto = sqlx::query(sql::EXISTE_PRODUCTO)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    if producto.is_none() {
        return Err(ApiError::ProductNotFound);
    }

    if let Some(id_categoria) = cambios.id_categoria {
        let categoria = sqlx::query(sql::EXISTE_CATEGORIA)
            .bind(id_categoria)
            .fetch_optional(pool)
            .await?;
        if categoria.is_none() {
            return Err(ApiError::CategoryNotFound);
        }
    }

    let q = sql::update_producto(id, cambios).ok_or(ApiError::EmptyUpdate)?;
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    bind_params(sqlx::query(&q.sql), &q.params)
        .execute(pool)
        .await?;
    Ok(())
}

fn bind_params<'q>(
    mut query: Query<'q, Any, AnyArguments<'q>>,
    params: &'q [SqlParam],
) -> Query<'q, Any, AnyArguments<'q>> {
    for p in params {
        query = match p {
            SqlParam::Int(n) => query.bind(*n),
            SqlParam::Float(x) => query.bind(*x),
            SqlParam::Text(s) => query.bind(s.as_str()),
        };
    }
    query
}
