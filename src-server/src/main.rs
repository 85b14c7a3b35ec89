use std::net::SocketAddr;
use std::sync::Arc;

use interface_generator_server::{build_router, AssetState, Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!("Serving {}", config.root.display());

    let app = build_router(Arc::new(AssetState::new(config.root)));
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], config.port))).await?;

    info!("Server running at http://localhost:{}/", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
