use clap::Parser;
use tracing::{debug, info};

use geo_smoke::{cli::Cli, config::Config, error::SmokeError, logging::init_logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = start(&cli).await {
        eprintln!("geo-smoke: {e}");
        std::process::exit(e.exit_code());
    }
}

async fn start(cli: &Cli) -> Result<(), SmokeError> {
    // Load configuration first to get logging settings
    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.logging.level)?;

    info!("geo-smoke starting");
    debug!("CLI arguments: {:?}", cli);

    cli.run(&config).await?;

    info!("geo-smoke finished");
    Ok(())
}
