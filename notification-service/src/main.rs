use notification_service::{build_router, config::ServiceConfig, db, services, AppState};
use service_core::error::AppError;
use service_core::observability::init_tracing;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = ServiceConfig::from_env()?;

    init_tracing(&config.service_name, &config.log_level);

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        environment = ?config.environment,
        "Starting notification type catalog service"
    );

    let pool = db::create_pool(&config.database).await.map_err(|e| {
        tracing::error!("Failed to connect to PostgreSQL: {}", e);
        AppError::DatabaseError(anyhow::Error::new(e))
    })?;

    db::run_migrations(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        AppError::DatabaseError(anyhow::Error::new(e))
    })?;

    let database = services::Database::new(pool);
    let jwt = services::JwtService::new(&config.jwt)?;
    let catalog = services::CatalogService::new(Arc::new(database));

    let state = AppState {
        config: config.clone(),
        jwt,
        catalog,
    };

    let app = build_router(state).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
