//! CLI for devres.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use devres_core::config;
use std::path::PathBuf;

use commands::{run_base_url, run_completions, run_config, run_fetch, FetchArgs};

/// Top-level CLI for devres.
#[derive(Debug, Parser)]
#[command(name = "devres")]
#[command(about = "devres: serve web assets from a live dev server, falling back to bundled copies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch one resource from the live asset server, falling back to a bundled file.
    Fetch {
        /// Resource path appended to the base URL (e.g. /js/app.js).
        path: String,

        /// Content type to announce for the resource.
        #[arg(long, value_name = "TYPE")]
        content_type: Option<String>,

        /// Bundled file served when the live server cannot be reached.
        #[arg(long, value_name = "FILE")]
        fallback: Option<PathBuf>,

        /// Write the resource here instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Override the resolved base URL.
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Treat an unreachable server as "not found" even when a fallback is given.
        #[arg(long)]
        no_fallback: bool,
    },

    /// Print the base URL resources are fetched from.
    BaseUrl,

    /// Show the config file location and effective values.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // Completions need no config; don't create one as a side effect.
        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                path,
                content_type,
                fallback,
                output,
                base_url,
                no_fallback,
            } => {
                let args = FetchArgs {
                    path,
                    content_type: content_type.unwrap_or_default(),
                    fallback,
                    output,
                    base_url,
                    no_fallback,
                };
                run_fetch(&cfg, args).await?;
            }
            CliCommand::BaseUrl => run_base_url(&cfg),
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
