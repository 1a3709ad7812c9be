use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_engine=info")),
        )
        .init();

    let settings = ServerSettings::from_env();

    let config = ConfigLoader::load(&settings.config_dir)
        .with_context(|| format!("failed to load configuration from {}", settings.config_dir))?;
    info!(
        company = %config.company().name,
        holidays = config.holidays().holidays().len(),
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!(addr = %settings.bind_addr, "Payroll engine listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
