use tracing_subscriber::EnvFilter;

use lifescan_server::config::ServerConfig;
use lifescan_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;
    lifescan_questionnaire::verify_all()?;

    let app = lifescan_server::router(AppState::new(&config));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        prediction_url = %config.prediction_url,
        timeout_secs = config.prediction_timeout.as_secs(),
        "lifescan server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
