//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use versioned_pages::output::OutputConfig;

/// Versioned Pages - Publish versioned documentation sites to a publishing branch
#[derive(Parser, Debug)]
#[command(name = "versioned-pages")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Publish the built site into the publishing branch checkout
    Deploy(commands::deploy::DeployArgs),

    /// Print the version label a trigger reference normalizes to
    Resolve(commands::resolve::ResolveArgs),

    /// Show the version manifest of a publishing-branch checkout
    Versions(commands::versions::VersionsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.log_level.as_str()),
        )
        .init();

        let out = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Deploy(args) => commands::deploy::execute(args, &out),
            Commands::Resolve(args) => commands::resolve::execute(args),
            Commands::Versions(args) => commands::versions::execute(args, &out),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
