use clap::{Parser, Subcommand};
use geo_llm_sdk::claude::ClaudeClient;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::{
    config::{mask_api_key, Config},
    error::SmokeError,
    probe, smoke,
};

#[derive(Debug, Parser)]
#[command(name = "geo-smoke")]
#[command(about = "Smoke test for the Anthropic Messages API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Extra configuration file, layered over the standard ones
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommands (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send the fixed GEO prompt once and print text, usage and cost
    Run,

    /// Check which Claude models the API key can use
    Probe {
        /// Model to probe (repeatable; defaults to the known Claude models)
        #[arg(long = "model")]
        models: Vec<String>,
    },
}

impl Cli {
    pub async fn run(&self, config: &Config) -> Result<(), SmokeError> {
        let client = build_client(config)?;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match &self.command {
            None | Some(Commands::Run) => {
                smoke::run_and_report(&client, &mut out).await?;
            }
            Some(Commands::Probe { models }) => {
                let models = if models.is_empty() {
                    probe::default_models()
                } else {
                    models.clone()
                };
                probe::probe_models(&client, &models, &mut out).await?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

/// Resolve the key and build a client from configuration
pub fn build_client(config: &Config) -> Result<ClaudeClient, SmokeError> {
    let api_key = config.api_key()?;
    info!(api_key = %mask_api_key(&api_key), base_url = %config.anthropic.base_url, "Using Anthropic API");

    let client = ClaudeClient::new(api_key)?
        .with_base_url(&config.anthropic.base_url)
        .with_timeout(config.anthropic.timeout())?;
    Ok(client)
}
