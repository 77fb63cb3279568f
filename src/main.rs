mod config;
mod github;
mod http;
mod logger;
mod notifier;
mod webhook;

use anyhow::{Context, Result};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    logger::init()?;

    log::info!("Starting");
    let config = Config::load().await.context("Cannot load config file")?;

    notifier::run(&config)
        .await
        .context("Cannot check pull request merge readiness")?;

    Ok(())
}
