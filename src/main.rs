use std::net::SocketAddr;
use std::sync::Arc;

use profile_search::search::handlers::router;
use profile_search::store::config::StoreConfig;
use profile_search::store::mongo::MongoProfileStore;
use profile_search::store::ProfileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = StoreConfig::from_env()?;
    let store: Arc<dyn ProfileStore> = Arc::new(MongoProfileStore::connect(&config).await?);

    let app = router(store);

    let bind_addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()?;

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
