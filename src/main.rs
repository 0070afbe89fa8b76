//! subgate: scrape movie subtitle listings and recover archive text over HTTP.

mod config;
mod server;

use std::net::SocketAddr;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("fatal: {err}");
            ExitCode::FAILURE
        },
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::load()?;
    let state = server::AppState::new(&config)?;
    let app = server::router(state);

    let addr = SocketAddr::from((config.bind, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
