use anyhow::Context;

use service_stub::config::get_configuration;
use service_stub::startup::AppServer;
use service_stub::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "service_stub".into(),
        "info".into(),
        std::io::stdout,
    ))
    .context("Failed to install the tracing subscriber")?;

    let configuration = get_configuration().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    let server = AppServer::build(configuration).map_err(|e| {
        tracing::error!(error = ?e, "Failed to start server");
        e
    })?;

    server.run_until_stopped().await?;

    Ok(())
}
