//! Entity commands - teams, players, matches and transactions by id.
//!
//! Every command accepts several ids; they are fetched concurrently through
//! one client so they share its cache and metrics.

use anyhow::Result;
use clap::Args;
use futures::future::join_all;
use tracing::info;

use super::{build_client, report};
use crate::Cli;

/// Arguments shared by the by-id commands.
#[derive(Args)]
pub struct IdArgs {
    /// One or more numeric vlr.gg ids.
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<String>,
}

/// Runs the team command.
pub async fn run_team(args: &IdArgs, cli: &Cli) -> Result<()> {
    info!(ids = ?args.ids, "Fetching teams");
    let client = build_client(cli)?;

    let results = join_all(args.ids.iter().map(|id| client.get_team(id, cli.use_cache()))).await;
    let results = args.ids.iter().map(String::as_str).zip(results).collect();

    report(cli, &client, results, |f, _, team| f.format_team(team))
}

/// Runs the player command.
pub async fn run_player(args: &IdArgs, cli: &Cli) -> Result<()> {
    info!(ids = ?args.ids, "Fetching players");
    let client = build_client(cli)?;

    let results =
        join_all(args.ids.iter().map(|id| client.get_player(id, cli.use_cache()))).await;
    let results = args.ids.iter().map(String::as_str).zip(results).collect();

    report(cli, &client, results, |f, _, player| f.format_player(player))
}

/// Runs the match command.
pub async fn run_match(args: &IdArgs, cli: &Cli) -> Result<()> {
    info!(ids = ?args.ids, "Fetching matches");
    let client = build_client(cli)?;

    let results = join_all(
        args.ids
            .iter()
            .map(|id| client.get_completed_match(id, cli.use_cache())),
    )
    .await;
    let results = args.ids.iter().map(String::as_str).zip(results).collect();

    report(cli, &client, results, |f, id, game| {
        f.format_completed_match(id, game.as_ref())
    })
}

/// Runs the transactions command.
pub async fn run_transactions(args: &IdArgs, cli: &Cli) -> Result<()> {
    info!(ids = ?args.ids, "Fetching transactions");
    let client = build_client(cli)?;

    let results = join_all(
        args.ids
            .iter()
            .map(|id| client.get_team_transactions(id, cli.use_cache())),
    )
    .await;
    let results = args.ids.iter().map(String::as_str).zip(results).collect();

    report(cli, &client, results, |f, id, txns| f.format_transactions(id, txns))
}
