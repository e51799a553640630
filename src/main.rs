//! Catalog server: loads settings, prepares the store, serves the API and runs
//! the stats scheduler until Ctrl-C.

use catalog_service::{app, apply_migrations, connect, AppConfig, AppState, StatsScheduler};
use tokio::net::TcpListener;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config.database_url, config.max_connections).await?;
    apply_migrations(&pool).await?;
    let state = AppState::new(pool);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let scheduler = config.stats_period().map(|period| {
        StatsScheduler::new(state.stats.clone(), period).spawn(stopped(shutdown_rx.clone()))
    });
    if scheduler.is_none() {
        tracing::info!("stats scheduler disabled");
    }

    let router = app(state, config.body_limit_bytes);
    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    let server = axum::serve(listener, router).with_graceful_shutdown(stopped(shutdown_rx));

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
        }
        let _ = shutdown_tx.send(true);
    });

    server.await?;
    if let Some(handle) = scheduler {
        handle.await?;
    }
    Ok(())
}

/// Resolves once the shutdown flag is set or the sender is gone.
async fn stopped(mut rx: watch::Receiver<bool>) {
    while !*rx.borrow() {
        if rx.changed().await.is_err() {
            break;
        }
    }
}
