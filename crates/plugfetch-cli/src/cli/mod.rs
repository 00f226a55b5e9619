//! CLI for plugfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_detect, run_man, run_name, run_plan, PlanOptions};

/// Top-level CLI for plugfetch.
#[derive(Debug, Parser)]
#[command(name = "plugfetch")]
#[command(about = "plugfetch: plan fetch/extract commands for plugin archive URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show where a plugin URL would be installed.
    Detect {
        /// Plugin source URL (archive, release asset, or raw file).
        url: String,
        /// Base directory (overrides `base_path` from config).
        #[arg(long, value_name = "PATH")]
        base: Option<PathBuf>,
    },

    /// Print the local directory name derived from a URL.
    Name {
        /// Plugin source URL.
        url: String,
    },

    /// Print the command plan that fetches a URL. Nothing is executed.
    Plan {
        /// Plugin source URL.
        url: String,
        /// Destination path (default: the detected install path).
        #[arg(long, value_name = "PATH")]
        dest: Option<PathBuf>,
        /// Base directory (overrides `base_path` from config).
        #[arg(long, value_name = "PATH")]
        base: Option<PathBuf>,
        /// Comma-separated tool list to plan against instead of probing PATH.
        #[arg(long, value_name = "TOOLS")]
        tools: Option<String>,
        /// Emit the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Detect { url, base } => run_detect(&url, base)?,
            CliCommand::Name { url } => run_name(&url)?,
            CliCommand::Plan {
                url,
                dest,
                base,
                tools,
                json,
            } => run_plan(
                &url,
                PlanOptions {
                    dest,
                    base,
                    tools,
                    json,
                },
            )?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
