use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use todo_server::telemetry::{self, TelemetryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let telemetry = telemetry::init(TelemetryConfig::default())?;

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    todo_server::run(listener).await?;

    info!("shutting down");
    telemetry.shutdown()?;
    Ok(())
}
