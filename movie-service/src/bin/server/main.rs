use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use movie_service::config::Config;
use movie_service::config::StorageBackend;
use movie_service::inbound::http::router::create_router;
use movie_service::inbound::http::router::AppState;
use movie_service::outbound::repositories::memory::InMemoryMovieRepository;
use movie_service::outbound::repositories::memory::InMemoryReviewRepository;
use movie_service::outbound::repositories::memory::InMemoryUserRepository;
use movie_service::outbound::repositories::movie::PostgresMovieRepository;
use movie_service::outbound::repositories::review::PostgresReviewRepository;
use movie_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movie-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        backend = ?config.database.backend,
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let auth_config = config
        .auth_config()
        .context("Invalid authentication settings")?;
    let authenticator = Arc::new(Authenticator::new(&auth_config));

    let state = match config.database.backend {
        StorageBackend::Postgres => {
            let database_url = config
                .database
                .url
                .as_deref()
                .context("database.url is required for the postgres backend")?;

            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(database_url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            AppState::new(
                Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                Arc::new(PostgresMovieRepository::new(pg_pool.clone())),
                Arc::new(PostgresReviewRepository::new(pg_pool)),
                authenticator,
            )
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");

            AppState::new(
                Arc::new(InMemoryUserRepository::new()),
                Arc::new(InMemoryMovieRepository::new()),
                Arc::new(InMemoryReviewRepository::new()),
                authenticator,
            )
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
