//! Brewlog - Coffee Catalog Service - Main Entry Point

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use brewlog_api_http::{router, ApiState};
use brewlog_core::application::CatalogService;
use brewlog_infra_sqlite::{close_pool, create_pool, run_migrations, SqliteCoffeeRepository};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DB_PATH: &str = "~/.brewlog/catalog.db";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("BREWLOG_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("brewlog=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Brewlog v{} starting...", VERSION);

    // 2. Load configuration
    let db_path = std::env::var("BREWLOG_DB_PATH")
        .unwrap_or_else(|_| shellexpand::tilde(DEFAULT_DB_PATH).into_owned());

    let http_port: u16 = std::env::var("BREWLOG_HTTP_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    info!(db_path = %db_path, "Initializing database...");

    // 3. Initialize database
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = create_pool(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("DB pool creation failed: {}", e))?;
    run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Schema bootstrap failed: {}", e))?;

    // 4. Setup dependencies (DI wiring)
    let repo = Arc::new(SqliteCoffeeRepository::new(pool.clone()));
    let catalog = Arc::new(CatalogService::new(repo.clone(), repo));
    let app = router(ApiState { catalog });

    // 5. Serve until Ctrl+C
    let addr = format!("0.0.0.0:{}", http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    // 6. Drain the pool before exit
    close_pool(&pool).await;
    info!("Brewlog stopped");

    Ok(())
}
