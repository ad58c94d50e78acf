//! Catalog operations and request validation.

mod catalogo;
mod validation;
pub use catalogo::*;
pub use validation::RequestValidator;
