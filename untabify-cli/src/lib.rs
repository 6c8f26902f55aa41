//! Untabify CLI library
//!
//! This library provides the command-line interface around
//! `untabify-core`: it reads files or stdin, splits them into lines and runs
//! each line through the core tab expander.

pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()
        .ok();
}
