use hd_server::{AppState, build_router, logger};

use std::error::Error;
use std::time::Duration;

use log::{debug, error, info, warn};
use tokio::net::TcpListener;

/// How often idle login-throttle entries are dropped
const LIMITER_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let dotenv_result = dotenvy::dotenv();

    // Load and validate configuration
    let config = hd_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting hd-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv_result {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = hd_db::open_pool(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    let app_state = AppState::from_config(pool, &config)?;

    // Periodically forget usernames whose login budget has refilled
    let limiter = app_state.login_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_SWEEP_INTERVAL);
        loop {
            interval.tick().await;
            limiter.forget_stale();
            debug!("Login limiter tracking {} usernames", limiter.tracked_keys());
        }
    });

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            warn!("Server will only stop when the process is killed");
            std::future::pending::<()>().await;
        }
    }
}
