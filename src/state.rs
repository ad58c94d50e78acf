//! Shared application state for all routes. The pool is the only state.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}
