//! Ease-Tec catalog API: HTTP CRUD over a product/category catalog, backed by
//! an embedded SQLite file or a remote PostgreSQL database behind one query
//! dialect.

pub mod config;
pub mod db;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::Settings;
pub use db::Backend;
pub use error::ApiError;
pub use routes::{app_router, catalogo_routes, common_routes};
pub use state::AppState;
