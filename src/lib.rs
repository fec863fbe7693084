pub mod api;
pub mod bootstrap;
pub mod config;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export the bootstrap surface
pub use bootstrap::{ensure_reference_data, BootstrapError, Sha256Hasher};

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store};

// Function for integration testing
pub async fn run_server() -> anyhow::Result<()> {
    use axum::serve;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level only (suppress DEBUG logs)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    // Load configuration
    let config = crate::config::AppConfig::load()?;

    // Connect to PostgreSQL
    let database_url = config.database_url()?;
    let postgres_store = crate::store::PostgresStore::new(&database_url).await?;

    // Create the reference-data tables if missing
    postgres_store.migrate().await?;

    let store = Arc::new(postgres_store);

    // One bootstrap pass before the server accepts requests
    let hasher = crate::bootstrap::Sha256Hasher;
    crate::bootstrap::ensure_reference_data(store.as_ref(), &config, &hasher).await?;

    // Create router with state
    let app = crate::api::routes::create_router().with_state(store);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;

    serve(listener, app).await?;

    Ok(())
}
