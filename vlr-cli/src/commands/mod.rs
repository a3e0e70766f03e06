//! CLI command implementations.

pub mod config;
pub mod entity;
pub mod listing;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, warn};
use vlr_core::Envelope;
use vlr_fetch::ScrapeError;
use vlr_scrapers::VlrClient;
use vlr_store::ClientConfig;

use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Loads the configuration named by `--config`, or the default one.
pub fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ClientConfig::load().context("Failed to load config")?,
    };
    Ok(config)
}

/// Builds a client from the active configuration.
pub fn build_client(cli: &Cli) -> Result<VlrClient> {
    let config = load_config(cli)?;
    debug!(cache = config.cache.enabled, retries = config.fetch.retries, "Building client");
    VlrClient::from_config(&config).context("Failed to create client")
}

/// Prints every successful result, reports the failed ones and returns the
/// first failure so the exit code reflects it.
pub fn report<T, F>(
    cli: &Cli,
    client: &VlrClient,
    results: Vec<(&str, Result<Envelope<T>, ScrapeError>)>,
    render: F,
) -> Result<()>
where
    T: Serialize,
    F: Fn(&TextFormatter, &str, &T) -> String,
{
    let mut successes = Vec::new();
    let mut first_error = None;

    for (id, result) in results {
        match result {
            Ok(envelope) => successes.push((id, envelope)),
            Err(e) => {
                warn!(id, error = %e, "Retrieval failed");
                if !cli.quiet && cli.format == OutputFormat::Text {
                    eprintln!("{}", TextFormatter::new(!cli.no_color).format_error(id, &e.to_string()));
                }
                if first_error.is_none() {
                    first_error = Some(anyhow::Error::new(e).context(format!("Failed to fetch {id}")));
                }
            }
        }
    }

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            let blocks: Vec<String> = successes
                .iter()
                .map(|(id, envelope)| render(&formatter, id, &envelope.data))
                .collect();
            if !blocks.is_empty() {
                println!("{}", blocks.join("\n\n"));
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let envelopes: Vec<&Envelope<T>> = successes.iter().map(|(_, e)| e).collect();
            if !envelopes.is_empty() {
                println!("{}", formatter.format_envelopes(&envelopes)?);
            }
        }
    }

    print_stats(cli, client)?;

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Prints the client's call metrics when `--stats` is set.
///
/// JSON metrics go to stderr so stdout stays a single document.
pub fn print_stats(cli: &Cli, client: &VlrClient) -> Result<()> {
    if !cli.stats {
        return Ok(());
    }

    let report = client.metrics();
    match cli.format {
        OutputFormat::Text => {
            println!();
            println!("{}", TextFormatter::new(!cli.no_color).format_metrics(&report));
        }
        OutputFormat::Json => {
            eprintln!("{}", JsonFormatter::new(cli.pretty).format(&report)?);
        }
    }
    Ok(())
}
