mod ai;
mod app;
mod classifier;
mod config;
mod domain;
mod infrastructure;
mod keywords;
mod server;

use anyhow::Result;
use infrastructure::{logging, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_config()?;
    logging::init_tracing(&config.logging)?;

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::PhishGuardApp::initialize(config, shutdown.clone())?;
    app.run().await
}
