use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ra_api::{create_app, AppState};
use ra_core::services::{TokenCleanupConfig, TokenCleanupService, TokenService, TokenServiceConfig};
use ra_infra::{create_notifier, AlertNotifier, DatabasePool, PgTokenRepository, PgUserDirectory};
use ra_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting RotAuth API Server");

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    if config.debug {
        warn!("Debug mode enabled: fixture users are seeded and every refresh sends a notification");
    }

    let database = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to the database")?;
    database.ensure_schema().await?;

    let user_directory = Arc::new(PgUserDirectory::new(database.get_pool().clone()));
    if config.debug {
        user_directory.seed_fixture_users().await?;
    }

    let token_repository = Arc::new(PgTokenRepository::new(database.get_pool().clone()));
    let token_config = TokenServiceConfig::from_app_config(&config)?;

    let cleanup = Arc::new(TokenCleanupService::new(
        token_repository.clone(),
        TokenCleanupConfig::from(&config.cleanup),
    ));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let cleanup_handle = cleanup.start_background_task(shutdown_rx);

    let notifier = Arc::new(create_notifier(
        config.debug,
        &config.notification,
        user_directory.clone(),
    ));
    info!("Notifications via {}", notifier.provider_name());

    let served = serve(&config, token_repository, notifier, user_directory, token_config).await;

    info!("Shutting down");
    let _ = shutdown_tx.send(true);
    if let Some(handle) = cleanup_handle {
        if let Err(e) = handle.await {
            warn!("Token cleanup task ended abnormally: {}", e);
        }
    }
    database.close().await;

    served
}

/// Builds the token service around `notifier` and runs the HTTP server until
/// it receives a stop signal
async fn serve(
    config: &AppConfig,
    token_repository: Arc<PgTokenRepository>,
    notifier: Arc<AlertNotifier<PgUserDirectory>>,
    user_directory: Arc<PgUserDirectory>,
    token_config: TokenServiceConfig,
) -> anyhow::Result<()> {
    let token_service = Arc::new(TokenService::new(token_repository, notifier, token_config));

    let app_state = web::Data::new(AppState {
        token_service,
        user_directory,
        trust_proxy_headers: config.trust_proxy_headers,
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
