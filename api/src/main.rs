use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::info;

use taskboard_api::bootstrap::app_context::{AppContext, AppServices};
use taskboard_api::bootstrap::config::Config;
use taskboard_api::infrastructure::db;
use taskboard_api::presentation::http as api_http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "taskboard_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting taskboard backend");

    // Database: a failure here aborts startup
    let pool = db::connect_pool(&cfg.database_url, cfg.database_max_connections).await?;
    db::ensure_schema(&pool).await?;
    info!(url = %cfg.database_url, "database_ready");

    let ctx = AppContext::new(cfg.clone(), AppServices::sqlx(pool.clone()));
    let app = api_http::router(ctx, pool);

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutdown_complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "ctrl_c_handler_failed");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown_signal_received");
}
