//! HTTP handlers for the catalog endpoints.

pub mod categoria;
pub mod producto;
pub use categoria::*;
pub use producto::*;
