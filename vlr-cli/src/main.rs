// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! vlr CLI - vlr.gg esports statistics from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Team profile
//! vlr team 2
//!
//! # Several players at once, as JSON
//! vlr player 9 4004 --format json --pretty
//!
//! # A finished match
//! vlr match 353177
//!
//! # Live and upcoming matches
//! vlr incoming
//!
//! # Full match history of a team (follows pagination)
//! vlr team-matches 2
//!
//! # Search
//! vlr search "sentinels" --category teams
//!
//! # Show the config file location
//! vlr config path
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vlr_fetch::{FetchError, ScrapeError};
use vlr_store::ClientConfig;

use commands::{config, entity, listing};

// ============================================================================
// CLI Definition
// ============================================================================

/// vlr CLI - vlr.gg esports statistics.
#[derive(Parser)]
#[command(name = "vlr")]
#[command(about = "Scrape teams, players and matches from vlr.gg")]
#[command(long_about = r#"
vlr fetches pages from vlr.gg and prints the extracted records.

Pages are cached in memory for the lifetime of one invocation, so asking
for the same entity twice costs a single request.

Examples:
  vlr team 2                         # Team profile
  vlr player 9 4004                  # Two players, fetched concurrently
  vlr match 353177 --format json     # Completed match as JSON
  vlr team-matches 2 --page 1        # One page of a team's history
  vlr search tenz --category players # Search
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Bypass the cache for every request.
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Print call metrics after the command.
    #[arg(long, global = true)]
    pub stats: bool,

    /// Configuration file to use instead of the default location.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Whether requests may be served from and stored in the cache.
    pub fn use_cache(&self) -> bool {
        !self.no_cache
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show one or more team profiles.
    #[command(visible_alias = "t")]
    Team(entity::IdArgs),

    /// Show one or more player profiles.
    #[command(visible_alias = "p")]
    Player(entity::IdArgs),

    /// Show one or more completed matches.
    #[command(visible_alias = "m")]
    Match(entity::IdArgs),

    /// Show roster transactions of one or more teams.
    Transactions(entity::IdArgs),

    /// List live and upcoming matches.
    #[command(visible_alias = "i")]
    Incoming,

    /// Show the match history of a team.
    TeamMatches(listing::TeamMatchesArgs),

    /// Search teams, players, events and series.
    #[command(visible_alias = "s")]
    Search(listing::SearchArgs),

    /// Manage configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Nothing found for the requested entity.
    NotFound = 2,
    /// Page could not be interpreted.
    ParseError = 3,
    /// Timeout.
    Timeout = 4,
}

impl ExitCode {
    /// Picks the exit code matching an error chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        let Some(scrape) = error.downcast_ref::<ScrapeError>() else {
            return Self::Error;
        };
        match scrape {
            ScrapeError::Extraction(_) => Self::ParseError,
            ScrapeError::Fetch(fetch) => match fetch {
                FetchError::Timeout { .. } => Self::Timeout,
                FetchError::Exhausted { source, .. }
                    if matches!(**source, FetchError::Timeout { .. }) =>
                {
                    Self::Timeout
                }
                FetchError::PermanentHttp { status: 404, .. } => Self::NotFound,
                _ => Self::Error,
            },
            ScrapeError::PageLimitExceeded { .. } => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

const VERBOSE_FILTER: &str =
    "vlr_cli=debug,vlr_fetch=debug,vlr_scrapers=debug,vlr_store=debug,info";

/// Directives used when `RUST_LOG` is unset: `--verbose` wins, then the
/// configured `log_level`, then `warn`.
fn fallback_directives(verbose: bool, config: Option<&ClientConfig>) -> &str {
    if verbose {
        VERBOSE_FILTER
    } else {
        config.map_or("warn", |c| c.log_level.as_str())
    }
}

fn log_filter(verbose: bool, config: Option<&ClientConfig>) -> EnvFilter {
    let fallback = fallback_directives(verbose, config);
    if verbose {
        return EnvFilter::new(fallback);
    }
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn setup_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }

    // A broken config file is reported by the command itself.
    let config = commands::load_config(cli).ok();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(log_filter(cli.verbose, config.as_ref()))
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli);

    let result = match &cli.command {
        Commands::Team(args) => entity::run_team(args, &cli).await,
        Commands::Player(args) => entity::run_player(args, &cli).await,
        Commands::Match(args) => entity::run_match(args, &cli).await,
        Commands::Transactions(args) => entity::run_transactions(args, &cli).await,
        Commands::Incoming => listing::run_incoming(&cli).await,
        Commands::TeamMatches(args) => listing::run_team_matches(args, &cli).await,
        Commands::Search(args) => listing::run_search(args, &cli).await,
        Commands::Config(args) => config::run(args, &cli),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}
