use bookshelf::cli::CliOptions;
use bookshelf::{Config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    logging::init(config.log_format)?;

    let config = config.with_cli(&CliOptions::from_args());
    tracing::info!(service = %config.service, "Starting bookshelf");

    bookshelf::run(config).await
}
