//! `untabify` command-line entry point

use clap::Parser;
use std::process::ExitCode;
use untabify_cli::commands::Commands;

/// Expand tabs to spaces at fixed tab stops
#[derive(Debug, Parser)]
#[command(name = "untabify", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    untabify_cli::init_logging(cli.verbose, cli.quiet);

    log::debug!("Arguments: {:?}", cli);

    match cli.command.execute() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["untabify", "check", "-vv", "-i", "a.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
