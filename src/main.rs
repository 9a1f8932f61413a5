use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use sysfacts::{api, collectors::HostInspector};
use tracing::info;

/// Sysfacts — desktop Linux system inventory served as JSON over HTTP.
#[derive(Parser, Debug)]
#[command(name = "sysfacts", version, about)]
struct Cli {
    /// Address and port to listen on.
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sysfacts=debug,tower_http=debug".into()),
        )
        .init();

    let cli = Cli::parse();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting sysfacts");

    let state = api::AppState::new(Arc::new(HostInspector));
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!(addr = %cli.listen, "Listening");

    axum::serve(listener, app).await?;

    Ok(())
}
