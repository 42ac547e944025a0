use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use events_api::shell::config::Config;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    // The store lives for the process and is dropped with it.
    let app = router(AppState::in_memory());

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Events endpoints: http://{}/events_list, http://{}/post_event", addr, addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
