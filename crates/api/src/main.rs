use anyhow::Context;

use portal_api::config::PortalConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    portal_observability::init();

    let config = PortalConfig::from_env().context("invalid portal configuration")?;

    let app = portal_api::app::build_app(config.session_secret.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
