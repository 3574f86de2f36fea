use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use chirp_api::hits::HitCounter;
use chirp_api::{AppState, Platform, router};
use chirp_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpd=debug,chirp_api=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("CHIRP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("CHIRP_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;
    let db_path = std::env::var("CHIRP_DB_PATH").unwrap_or_else(|_| "chirp.db".into());
    let platform = Platform::parse(&std::env::var("PLATFORM").unwrap_or_default());
    let site_dir: PathBuf = std::env::var("CHIRP_SITE_DIR")
        .unwrap_or_else(|_| "site".into())
        .into();
    let metrics_template: PathBuf = std::env::var("CHIRP_METRICS_TEMPLATE")
        .unwrap_or_else(|_| "admin_metrics.html".into())
        .into();

    // Init database
    let db = Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state = AppState {
        db: Arc::new(db),
        hits: Arc::new(HitCounter::new()),
        platform,
        site_dir,
        metrics_template,
    };

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Chirp server listening on {} ({:?})", addr, platform);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
