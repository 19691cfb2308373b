use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use portrait_storefront::entities::setup_schema;
use portrait_storefront::storage::{DbStore, KvStore};
use portrait_storefront::{create_api_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db: DatabaseConnection = Database::connect(&config.database_url).await?;
    setup_schema(&db).await?;

    let store: Arc<dyn KvStore> = Arc::new(DbStore::new(Arc::new(db)));
    let state = Arc::new(AppState::build(config.clone(), store).await?);

    let app = create_api_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running at {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
