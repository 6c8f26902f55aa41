//! Check command implementation

use crate::document::{find_tabs, TabLocation};
use crate::input::InputSource;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::process::ExitCode;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,
}

impl CheckArgs {
    /// Execute the check command
    ///
    /// Exits with status 1 when any tab is found.
    pub fn execute(&self) -> Result<ExitCode> {
        let sources = InputSource::from_patterns(&self.input)?;
        let mut stdout = io::stdout().lock();
        let mut found = 0;

        for source in &sources {
            let text = source.read_text()?;
            let locations = find_tabs(&text);
            write_report(&mut stdout, &source.to_string(), &locations)?;
            found += locations.len();
        }

        stdout.flush()?;

        if found > 0 {
            log::warn!("Found {} tab(s) in {} input(s)", found, sources.len());
            Ok(ExitCode::FAILURE)
        } else {
            log::info!("No tabs found");
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Write one `label:line:column` entry per tab
fn write_report<W: Write>(writer: &mut W, label: &str, locations: &[TabLocation]) -> Result<()> {
    for location in locations {
        writeln!(writer, "{}:{}:{}: tab character", label, location.line, location.column)?;
    }
    Ok(())
}
