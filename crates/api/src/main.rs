use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hall_api::{AppConfig, AppState, StoreBackend, build_router};
use infra::{HallStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let store = connect_store(&config).await?;
    let state = AppState::new(store);

    let app = build_router(state, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn connect_store(config: &AppConfig) -> anyhow::Result<Arc<dyn HallStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; data is lost on shutdown");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .acquire_timeout(std::time::Duration::from_secs(3))
                .idle_timeout(Some(std::time::Duration::from_secs(600))) // 10 minutes
                .max_lifetime(Some(std::time::Duration::from_secs(1800))) // 30 minutes
                .connect(url)
                .await
                .context("Failed to connect to Postgres")?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            let store = PgStore::new(pool);
            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                store.migrate().await?;
                tracing::info!("Database migrations completed successfully");
            }

            Ok(Arc::new(store))
        }
    }
}

// Stop accepting on ctrl-c or SIGTERM and let in-flight requests finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to register SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("Shutdown signal received");
}
