mod page;
mod routes;
mod state;
mod upload;

use anyhow::Context;
use blockflow_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_or_default().with_context(|| {
        format!(
            "invalid config file '{}'",
            Config::config_path().display()
        )
    })?;

    let port: u16 = match std::env::var("PORT") {
        Ok(value) => value
            .parse()
            .with_context(|| format!("invalid PORT '{value}'"))?,
        Err(_) => config.server.port,
    };

    let state = state::AppState::new(config.render, config.server.max_upload_bytes);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    tracing::info!(%port, "blockflow listening");
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
