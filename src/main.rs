use anyhow::Context;
use person_registry::app::{bootstrap, build_app};
use person_registry::config::{ConfigService, ServerConfig};
use person_registry::di::Container;
use person_registry::lifecycle::shutdown_signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ConfigService::from_env();
    let server_config = ServerConfig::from_config(&config)?;

    // RUST_LOG wins over PERSON_REGISTRY_LOG
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server_config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting person-registry...");

    let container = bootstrap(Container::new()).context("failed to wire application")?;
    let app = build_app(&container)?;

    let addr = server_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Initiating graceful shutdown...");
        })
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
