//! Category endpoints. Read-only: the API never creates or edits categories.

use crate::error::ApiError;
use crate::models::Categoria;
use crate::service;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /categoria: every category, ordered by id.
#[utoipa::path(
    get,
    path = "/categoria",
    tag = "categoria",
    responses((status = 200, description = "Listado de categorías", body = [Categoria]))
)]
pub async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<Vec<Categoria>>, ApiError> {
    let categorias = service::list_categorias(&state.pool).await?;
    Ok(Json(categorias))
}
