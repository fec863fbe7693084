use axum::serve;
use backoffice_db::api::routes::create_router;
use backoffice_db::bootstrap::{ensure_reference_data, Sha256Hasher};
use backoffice_db::config::AppConfig;
use backoffice_db::store::PostgresStore;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with explicit filter to suppress sqlx debug logs
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info) // Default to Info for everything
        .filter_module("sqlx", LevelFilter::Warn) // Suppress sqlx Debug logs
        .init();

    println!("Backoffice-DB: Microfinance Back-Office Server");

    // Load configuration
    let config = AppConfig::load()?;
    println!(
        "Configuration loaded: server={}:{}",
        config.server.host, config.server.port
    );

    println!("Connecting to PostgreSQL...");
    let database_url = config.database_url()?;
    let postgres_store = PostgresStore::new(&database_url).await?;

    println!("Preparing reference-data tables...");
    postgres_store.migrate().await?;

    let store = Arc::new(postgres_store);

    // One bootstrap pass per process lifetime, before any request is served.
    // A fatal bootstrap error means the service must not come up at all.
    let hasher = Sha256Hasher;
    if let Err(err) = ensure_reference_data(store.as_ref(), &config, &hasher).await {
        log::error!("bootstrap failed, refusing to start: {:#}", anyhow::Error::new(err));
        std::process::exit(1);
    }

    run_server(create_router().with_state(store), &config).await?;

    Ok(())
}

async fn run_server(app: axum::Router, config: &AppConfig) -> anyhow::Result<()> {
    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("Backoffice-DB server running on http://{}", bind_address);

    serve(listener, app).await?;

    Ok(())
}
