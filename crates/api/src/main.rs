use anyhow::Context;

use supermarket_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ApiConfig::from_env()?;
    supermarket_observability::init(config.log_format);

    let app = supermarket_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        seeded = config.seed_catalog,
        "listening"
    );

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
