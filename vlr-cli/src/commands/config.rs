//! Config command - inspect and create the configuration file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::info;
use vlr_store::ClientConfig;

use super::load_config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show the configuration file path.
    Path,

    /// Write a configuration file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_path(cli),
        ConfigAction::Init { force } => init_config(cli, *force),
    }
}

fn config_path(cli: &Cli) -> PathBuf {
    cli.config.clone().unwrap_or_else(ClientConfig::default_path)
}

fn show_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_config(&config, &config_path(cli)));
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::new(cli.pretty).format(&config)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = config_path(cli);

    match cli.format {
        OutputFormat::Text => {
            let marker = if path.exists() { "" } else { " (not created)" };
            println!("{}{marker}", path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_file": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", JsonFormatter::new(cli.pretty).format(&paths)?);
        }
    }

    Ok(())
}

fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = config_path(cli);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    ClientConfig::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), "Configuration initialized");
    if !cli.quiet {
        println!("Wrote default configuration to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli_with_config(path: &std::path::Path, extra: &[&str]) -> Cli {
        let mut argv = vec!["vlr", "--config", path.to_str().unwrap(), "--quiet"];
        argv.extend_from_slice(extra);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let cli = cli_with_config(&path, &["config", "init"]);

        init_config(&cli, false).unwrap();

        let loaded = ClientConfig::load_from(&path).unwrap();
        assert_eq!(loaded, ClientConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let cli = cli_with_config(&path, &["config", "init"]);

        init_config(&cli, false).unwrap();
        assert!(init_config(&cli, false).is_err());
        init_config(&cli, true).unwrap();
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let cli = cli_with_config(&path, &["config", "path"]);
        assert_eq!(config_path(&cli), path);
    }

    #[test]
    fn test_load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = ClientConfig::default();
        config.fetch.retries = 5;
        config.save_to(&path).unwrap();

        let cli = cli_with_config(&path, &["config", "show"]);
        assert_eq!(load_config(&cli).unwrap().fetch.retries, 5);
    }
}
