//! Pizza API server
//!
//! Serves restaurants, pizzas and their prices. The store is opened and its
//! schema created before the listener binds, and closed after shutdown.

use pizza_api::{create_router, seed, AppState, PizzaStore, Settings};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("🍕 Starting Pizza API...");

    let settings = Settings::load()?;
    info!("📋 Configuration loaded successfully");

    let store = match PizzaStore::connect(&settings.database).await {
        Ok(store) => store,
        Err(e) => {
            error!("❌ FATAL: Failed to connect to database: {}", e);
            error!("DATABASE_URL (or DB_HOST/DB_NAME/...) must point at a reachable database");
            return Err(e.into());
        }
    };

    store.init_schema().await?;

    if settings.seed_demo_data {
        seed::seed_demo_data(&store).await?;
    }

    let state = Arc::new(AppState::new(store.clone()));
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("📚 API Endpoints:");
    info!("   GET    /health");
    info!("   GET    /restaurants");
    info!("   GET    /restaurants/{{id}}");
    info!("   DELETE /restaurants/{{id}}");
    info!("   GET    /pizzas");
    info!("   POST   /restaurant_pizzas");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close();
    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pizza_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
