//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("config: {0}")]
    Config(String),
    #[error("product not found")]
    ProductNotFound,
    #[error("category not found")]
    CategoryNotFound,
    #[error("empty update payload")]
    EmptyUpdate,
    #[error("validation: {0}")]
    Validation(String),
}

/// The wire contract is plain text: JSON rows on success, a short Spanish
/// message on failure. 5xx causes are logged here, at the handler boundary.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Db(ref e) => {
                tracing::error!(error = %e, "database failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            ApiError::Config(ref e) => {
                tracing::error!(error = %e, "configuration failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            ApiError::ProductNotFound => {
                (StatusCode::NOT_FOUND, "Producto no encontrado".to_string())
            }
            ApiError::CategoryNotFound => {
                (StatusCode::BAD_REQUEST, "Categoría no encontrada".to_string())
            }
            ApiError::EmptyUpdate => (
                StatusCode::BAD_REQUEST,
                "No hay datos para actualizar".to_string(),
            ),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        (status, body).into_response()
    }
}
