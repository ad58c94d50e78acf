//! Catalog query text and the dynamic `UPDATE ... SET` builder.
//!
//! Every statement uses `$n` placeholders, which bind positionally on both
//! backends (native on PostgreSQL, TCL-style on SQLite). Identifiers are
//! fixed; only values travel as parameters.

use crate::models::ActualizarProducto;

pub const SELECT_CATEGORIAS: &str =
    "SELECT id_categoria, nombre_categoria, descripcion FROM categorias ORDER BY id_categoria";

pub const SELECT_PRODUCTOS: &str = "SELECT p.id_producto, p.nombre_producto, p.url_imagen, \
     p.precio, p.stock, c.nombre_categoria \
     FROM productos p JOIN categorias c ON p.id_categoria = c.id_categoria \
     ORDER BY p.id_producto";

pub const SELECT_PRODUCTO_POR_ID: &str = "SELECT p.id_producto, p.nombre_producto, p.url_imagen, \
     p.precio, p.stock, c.nombre_categoria \
     FROM productos p JOIN categorias c ON p.id_categoria = c.id_categoria \
     WHERE p.id_producto = $1";

pub const INSERT_PRODUCTO: &str = "INSERT INTO productos \
     (nombre_producto, descripcion, url_imagen, precio, stock, id_categoria) \
     VALUES ($1, $2, $3, $4, $5, $6)";

pub const EXISTE_PRODUCTO: &str = "SELECT id_producto FROM productos WHERE id_producto = $1";

pub const EXISTE_CATEGORIA: &str = "SELECT id_categoria FROM categorias WHERE id_categoria = $1";

/// A value bound to one `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i64),
    Float(f64),
    Text(String),
}

/// SQL text plus its parameters, in placeholder order.
#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, p: SqlParam) -> usize {
        self.params.push(p);
        self.params.len()
    }
}

/// UPDATE of exactly the supplied fields. Returns `None` when the body
/// carries none, so the caller can reject the request before touching the
/// database. The id always binds last.
pub fn update_producto(id: i64, cambios: &ActualizarProducto) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets: Vec<String> = Vec::new();

    if let Some(ref nombre) = cambios.nombre_producto {
        let n = q.push_param(SqlParam::Text(nombre.clone()));
        sets.push(format!("nombre_producto = ${}", n));
    }
    if let Some(ref descripcion) = cambios.descripcion {
        let n = q.push_param(SqlParam::Text(descripcion.clone()));
        sets.push(format!("descripcion = ${}", n));
    }
    if let Some(ref url) = cambios.url_imagen {
        let n = q.push_param(SqlParam::Text(url.clone()));
        sets.push(format!("url_imagen = ${}", n));
    }
    if let Some(precio) = cambios.precio_venta {
        let n = q.push_param(SqlParam::Float(precio));
        sets.push(format!("precio = ${}", n));
    }
    if let Some(stock) = cambios.stock_actual {
        let n = q.push_param(SqlParam::Int(stock));
        sets.push(format!("stock = ${}", n));
    }
    if let Some(id_categoria) = cambios.id_categoria {
        let n = q.push_param(SqlParam::Int(id_categoria));
        sets.push(format!("id_categoria = ${}", n));
    }

    if sets.is_empty() {
        return None;
    }

    let id_param = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "UPDATE productos SET {} WHERE id_producto = ${}",
        sets.join(", "),
        id_param
    );
    Some(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_with_all_fields_binds_in_declaration_order() {
        let cambios = ActualizarProducto {
            nombre_producto: Some("Teclado mecánico".into()),
            descripcion: Some("Switches rojos".into()),
            url_imagen: Some("https://img.example.com/teclado.png".into()),
            precio_venta: Some(59.9),
            stock_actual: Some(12),
            id_categoria: Some(2),
        };
        let q = update_producto(7, &cambios).expect("non-empty body");
        assert_eq!(
            q.sql,
            "UPDATE productos SET nombre_producto = $1, descripcion = $2, url_imagen = $3, \
             precio = $4, stock = $5, id_categoria = $6 WHERE id_producto = $7"
        );
        assert_eq!(q.params.len(), 7);
        assert_eq!(q.params[0], SqlParam::Text("Teclado mecánico".into()));
        assert_eq!(q.params[3], SqlParam::Float(59.9));
        assert_eq!(q.params[6], SqlParam::Int(7));
    }

    #[test]
    fn update_with_one_field_sets_only_that_column() {
        let cambios = ActualizarProducto {
            stock_actual: Some(3),
            ..Default::default()
        };
        let q = update_producto(4, &cambios).expect("non-empty body");
        assert_eq!(q.sql, "UPDATE productos SET stock = $1 WHERE id_producto = $2");
        assert_eq!(q.params, vec![SqlParam::Int(3), SqlParam::Int(4)]);
    }

    #[test]
    fn update_without_fields_is_none() {
        assert!(update_producto(1, &ActualizarProducto::default()).is_none());
    }

    #[test]
    fn id_always_binds_last() {
        let cambios = ActualizarProducto {
            precio_venta: Some(10.0),
            id_categoria: Some(1),
            ..Default::default()
        };
        let q = update_producto(99, &cambios).expect("non-empty body");
        assert_eq!(q.params.last(), Some(&SqlParam::Int(99)));
        assert!(q.sql.ends_with("WHERE id_producto = $3"));
    }
}
