//! Scalar field checks on request bodies, ahead of the insert/update query.
//! Each failure turns into 400 with the specific message; type-shape errors
//! never reach here (the typed serde bodies reject them first).

use crate::error::ApiError;
use crate::models::{ActualizarProducto, NuevoProducto};
use regex::Regex;

/// Accepted shape for an image URL: absolute http(s), no whitespace.
const URL_IMAGEN_PATTERN: &str = r"^https?://\S+$";

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a `POST /producto` body.
    pub fn validate_nuevo(body: &NuevoProducto) -> Result<(), ApiError> {
        validate_nombre(&body.nuevo_nombre)?;
        validate_precio(body.nuevo_precio_venta)?;
        validate_stock(body.nuevo_stock_actual)?;
        if let Some(ref url) = body.nueva_url_imagen {
            validate_url_imagen(url)?;
        }
        Ok(())
    }

    /// Validate only the fields present in a `PUT /producto/:id` body.
    pub fn validate_cambios(body: &ActualizarProducto) -> Result<(), ApiError> {
        if let Some(ref nombre) = body.nombre_producto {
            validate_nombre(nombre)?;
        }
        if let Some(precio) = body.precio_venta {
            validate_precio(precio)?;
        }
        if let Some(stock) = body.stock_actual {
            validate_stock(stock)?;
        }
        if let Some(ref url) = body.url_imagen {
            validate_url_imagen(url)?;
        }
        Ok(())
    }
}

fn validate_nombre(nombre: &str) -> Result<(), ApiError> {
    if nombre.trim().is_empty() {
        return Err(ApiError::Validation(
            "El nombre del producto no puede estar vacío".into(),
        ));
    }
    Ok(())
}

fn validate_precio(precio: f64) -> Result<(), ApiError> {
    if !precio.is_finite() || precio < 0.0 {
        return Err(ApiError::Validation(
            "El precio debe ser un número mayor o igual a cero".into(),
        ));
    }
    Ok(())
}

fn validate_stock(stock: i64) -> Result<(), ApiError> {
    if stock < 0 {
        return Err(ApiError::Validation("El stock no puede ser negativo".into()));
    }
    Ok(())
}

fn validate_url_imagen(url: &str) -> Result<(), ApiError> {
    let re = Regex::new(URL_IMAGEN_PATTERN)
        .map_err(|_| ApiError::Validation("La URL de la imagen no es válida".into()))?;
    if !re.is_match(url) {
        return Err(ApiError::Validation(
            "La URL de la imagen no es válida".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActualizarProducto, NuevoProducto};

    fn nuevo_valido() -> NuevoProducto {
        NuevoProducto {
            nuevo_nombre: "Mouse Gamer".into(),
            nueva_descripcion: None,
            nueva_url_imagen: None,
            nuevo_precio_venta: 25.5,
            nuevo_stock_actual: 10,
            nuevo_id_categoria: 1,
        }
    }

    #[test]
    fn valid_insert_body_passes() {
        assert!(RequestValidator::validate_nuevo(&nuevo_valido()).is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let body = NuevoProducto {
            nuevo_nombre: "   ".into(),
            ..nuevo_valido()
        };
        assert!(matches!(
            RequestValidator::validate_nuevo(&body),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn negative_price_and_stock_are_rejected() {
        let body = NuevoProducto {
            nuevo_precio_venta: -0.01,
            ..nuevo_valido()
        };
        assert!(RequestValidator::validate_nuevo(&body).is_err());

        let body = NuevoProducto {
            nuevo_stock_actual: -1,
            ..nuevo_valido()
        };
        assert!(RequestValidator::validate_nuevo(&body).is_err());
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let body = NuevoProducto {
            nuevo_precio_venta: f64::NAN,
            ..nuevo_valido()
        };
        assert!(RequestValidator::validate_nuevo(&body).is_err());
    }

    #[test]
    fn image_url_must_be_http_or_https() {
        let body = NuevoProducto {
            nueva_url_imagen: Some("ftp://img.example.com/a.png".into()),
            ..nuevo_valido()
        };
        assert!(RequestValidator::validate_nuevo(&body).is_err());

        let body = NuevoProducto {
            nueva_url_imagen: Some("https://img.example.com/a.png".into()),
            ..nuevo_valido()
        };
        assert!(RequestValidator::validate_nuevo(&body).is_ok());
    }

    #[test]
    fn partial_body_checks_only_supplied_fields() {
        let cambios = ActualizarProducto {
            stock_actual: Some(0),
            ..Default::default()
        };
        assert!(RequestValidator::validate_cambios(&cambios).is_ok());

        let cambios = ActualizarProducto {
            precio_venta: Some(-5.0),
            ..Default::default()
        };
        assert!(RequestValidator::validate_cambios(&cambios).is_err());
    }
}
