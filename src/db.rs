//! Connection pool over the embedded or remote backend, schema bootstrap,
//! and category seeding. Everything after bootstrap speaks one query dialect;
//! only the DDL below differs per backend.

use crate::config::Settings;
use crate::error::ApiError;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::path::PathBuf;
use std::sync::Once;

/// Backend selected by the `DATABASE_URL` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ApiError> {
        if url.starts_with("sqlite:") {
            Ok(Backend::Sqlite)
        } else if url.starts_with("postgres:") || url.starts_with("postgresql:") {
            Ok(Backend::Postgres)
        } else {
            Err(ApiError::Config(format!(
                "unsupported DATABASE_URL scheme: {}",
                url.split(':').next().unwrap_or(url)
            )))
        }
    }
}

const SQLITE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS categorias (
        id_categoria INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre_categoria TEXT NOT NULL,
        descripcion TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS productos (
        id_producto INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre_producto TEXT NOT NULL,
        descripcion TEXT,
        url_imagen TEXT,
        precio REAL NOT NULL,
        stock INTEGER NOT NULL,
        id_categoria INTEGER NOT NULL REFERENCES categorias(id_categoria)
    )
    "#,
];

const POSTGRES_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS categorias (
        id_categoria BIGSERIAL PRIMARY KEY,
        nombre_categoria TEXT NOT NULL,
        descripcion TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS productos (
        id_producto BIGSERIAL PRIMARY KEY,
        nombre_producto TEXT NOT NULL,
        descripcion TEXT,
        url_imagen TEXT,
        precio DOUBLE PRECISION NOT NULL,
        stock BIGINT NOT NULL,
        id_categoria BIGINT NOT NULL REFERENCES categorias(id_categoria)
    )
    "#,
];

/// Categories written into an empty database. The API never creates
/// categories, so a fresh file needs a usable set before the first insert.
const SEED_CATEGORIAS: &[(&str, &str)] = &[
    ("Laptops", "Equipos portátiles para trabajo y estudio"),
    ("Periféricos", "Teclados, ratones y accesorios de escritorio"),
    ("Componentes", "Partes internas para armar o ampliar equipos"),
    ("Audio", "Audífonos, parlantes y micrófonos"),
];

static DRIVERS: Once = Once::new();

/// Connect, create tables when missing, and seed categories. The one-call
/// startup path; the pieces below stay public for composition and tests.
pub async fn init(settings: &Settings) -> Result<AnyPool, ApiError> {
    let backend = Backend::from_url(&settings.database_url)?;
    let pool = connect(settings, backend).await?;
    ensure_schema(&pool, backend).await?;
    seed_categorias(&pool).await?;
    tracing::info!(?backend, "database ready");
    Ok(pool)
}

/// Open the pool. For a SQLite file URL the parent directory is created
/// first; an in-memory URL is capped at one connection so every query sees
/// the same database. SQLite leaves foreign keys off unless each connection
/// opts in, so the pool turns them on as connections open.
pub async fn connect(settings: &Settings, backend: Backend) -> Result<AnyPool, ApiError> {
    DRIVERS.call_once(sqlx::any::install_default_drivers);

    if let Some(path) = sqlite_file_path(&settings.database_url) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Config(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
    }

    let in_memory = is_memory_url(&settings.database_url);
    let max_connections = if in_memory { 1 } else { settings.max_connections };
    let mut options = AnyPoolOptions::new().max_connections(max_connections);
    if in_memory {
        // An in-memory database vanishes with its connection; never recycle it.
        options = options
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    if backend == Backend::Sqlite {
        options = options.after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA foreign_keys = ON")
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        });
    }
    Ok(options.connect(&settings.database_url).await?)
}

/// Create the catalog tables when missing.
pub async fn ensure_schema(pool: &AnyPool, backend: Backend) -> Result<(), ApiError> {
    let statements = match backend {
        Backend::Sqlite => SQLITE_SCHEMA,
        Backend::Postgres => POSTGRES_SCHEMA,
    };
    for ddl in statements {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Insert the default categories when the table is empty. Existing rows win:
/// a database carried over from a previous run is left untouched.
pub async fn seed_categorias(pool: &AnyPool) -> Result<(), ApiError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categorias")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }
    for (nombre, descripcion) in SEED_CATEGORIAS {
        sqlx::query("INSERT INTO categorias (nombre_categoria, descripcion) VALUES ($1, $2)")
            .bind(*nombre)
            .bind(*descripcion)
            .execute(pool)
            .await?;
    }
    tracing::info!(categorias = SEED_CATEGORIAS.len(), "seeded categories");
    Ok(())
}

/// Filesystem path of a SQLite file URL; `None` for other schemes and for
/// in-memory databases.
fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_detected_from_scheme() {
        assert_eq!(Backend::from_url("sqlite:data/x.db").unwrap(), Backend::Sqlite);
        assert_eq!(Backend::from_url("sqlite::memory:").unwrap(), Backend::Sqlite);
        assert_eq!(
            Backend::from_url("postgres://localhost/catalogo").unwrap(),
            Backend::Postgres
        );
        assert_eq!(
            Backend::from_url("postgresql://localhost/catalogo").unwrap(),
            Backend::Postgres
        );
        assert!(Backend::from_url("mysql://localhost/catalogo").is_err());
    }

    #[test]
    fn sqlite_file_path_strips_scheme_and_query() {
        assert_eq!(
            sqlite_file_path("sqlite:data/ease_tec.db?mode=rwc"),
            Some(PathBuf::from("data/ease_tec.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite://data/ease_tec.db"),
            Some(PathBuf::from("data/ease_tec.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/x"), None);
    }

    #[test]
    fn memory_urls_are_recognized() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite:file:cache?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite:data/ease_tec.db?mode=rwc"));
    }
}
