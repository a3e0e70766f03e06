//! Listing commands - incoming matches, team match history and search.

use anyhow::Result;
use clap::Args;
use tracing::info;
use vlr_core::SearchCategory;

use super::{build_client, report};
use crate::Cli;

/// Arguments for the team-matches command.
#[derive(Args)]
pub struct TeamMatchesArgs {
    /// Team id.
    pub id: String,

    /// Fetch only this page (starting at 1) instead of the full history.
    #[arg(long)]
    pub page: Option<u32>,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search terms.
    pub query: String,

    /// Category to search in (all, teams, players, events, series).
    #[arg(long, short, default_value = "all")]
    pub category: SearchCategory,
}

/// Runs the incoming command.
pub async fn run_incoming(cli: &Cli) -> Result<()> {
    info!("Fetching incoming matches");
    let client = build_client(cli)?;

    let result = client.list_incoming_matches(cli.use_cache()).await;
    report(cli, &client, vec![("matches", result)], |f, _, matches| {
        f.format_incoming(matches)
    })
}

/// Runs the team-matches command.
pub async fn run_team_matches(args: &TeamMatchesArgs, cli: &Cli) -> Result<()> {
    let client = build_client(cli)?;

    match args.page {
        Some(page) => {
            info!(id = %args.id, page, "Fetching team matches page");
            let result = client
                .get_team_matches_page(&args.id, page, cli.use_cache())
                .await;
            report(cli, &client, vec![(args.id.as_str(), result)], |f, id, page| {
                f.format_team_matches(id, &page.matches, page.has_next_page)
            })
        }
        None => {
            info!(id = %args.id, "Fetching full team match history");
            let result = client.get_team_matches(&args.id, cli.use_cache()).await;
            report(cli, &client, vec![(args.id.as_str(), result)], |f, id, matches| {
                f.format_team_matches(id, matches, false)
            })
        }
    }
}

/// Runs the search command.
pub async fn run_search(args: &SearchArgs, cli: &Cli) -> Result<()> {
    info!(query = %args.query, category = %args.category, "Searching");
    let client = build_client(cli)?;

    let result = client
        .search(&args.query, args.category, cli.use_cache())
        .await;
    report(cli, &client, vec![(args.query.as_str(), result)], |f, query, results| {
        f.format_search(query, results)
    })
}
