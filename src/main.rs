use anyhow::Context;
use bubblechat::{config::initialize_config, logging::init_logging, tui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = initialize_config().context("failed to load configuration")?;
    let _logger = init_logging(&config).context("failed to start logging")?;

    tui::run(&config).await.context("chat screen failed")?;
    Ok(())
}
