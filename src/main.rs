//! detector-search command line client
//!
//! Sends one detector or utterance query to the search API and prints the
//! raw response.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use detector_search::{build_search_service, config, SearchParameters, SearchService};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detector-search", version, about = "Query the detector search API")]
struct Cli {
    /// Path to settings.yml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Request id forwarded to the search API
    #[arg(short, long, global = true)]
    request_id: Option<String>,

    /// Extra body parameter as key=value (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val, global = true)]
    params: Vec<(String, String)>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find detectors matching a query
    Detectors {
        /// Free-text query
        query: String,
    },
    /// Match a detector description against utterances
    Utterances {
        /// Detector description
        query: String,
        /// Candidate utterance (repeatable)
        #[arg(short, long = "utterance")]
        utterances: Vec<String>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (settings, source) = config::load(cli.config.as_deref())?;
    init_logging(settings.general.debug);
    info!("Starting detector-search v{}", detector_search::VERSION);
    info!("Loaded settings from {}", source);

    let service = build_search_service(&settings).context("failed to create search service")?;
    let parameters: SearchParameters = cli.params.into_iter().collect();
    let request_id = cli.request_id.as_deref();

    let outcome = match &cli.command {
        Command::Detectors { query } => {
            service
                .search_detectors(request_id, query, &parameters)
                .await
        }
        Command::Utterances { query, utterances } => {
            service
                .search_utterances(request_id, query, utterances, &parameters)
                .await
        }
    }?;

    match outcome {
        Some(response) => {
            println!("HTTP {}", response.status);
            println!("{}", response.text());
        }
        None => println!("Search is disabled; no results available"),
    }

    Ok(())
}
