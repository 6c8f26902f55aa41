//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;

pub mod check;
pub mod classify;
pub mod expand;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand tabs to spaces
    Expand(expand::ExpandArgs),

    /// Report lines that still contain tabs
    Check(check::CheckArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Show which characters of a text are ASCII symbols
    Classify(classify::ClassifyArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<ExitCode> {
        match self {
            Commands::Expand(args) => args.execute(),
            Commands::Check(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Classify(args) => args.execute(),
        }
    }
}
