//! Ease-Tec catalog API server.

use easetec_api::{app_router, db, AppState, Settings};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("easetec_api=info".parse()?))
        .init();

    let settings = Settings::from_env()?;
    let pool = db::init(&settings).await?;
    let app = app_router(AppState { pool });

    let addr: SocketAddr = format!("0.0.0.0:{}", settings.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
