//! Expand command implementation

use crate::config::CliConfig;
use crate::document::{expand_document, DocumentStats};
use crate::error::CliError;
use crate::input::{FileReader, InputSource};
use crate::output::{OutputSink, TextSink};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use untabify_core::{TabExpander, TabSize};

/// Arguments for the expand command
#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Width of a tab stop (1-8)
    #[arg(short, long, value_name = "N", env = "UNTABIFY_TAB_SIZE")]
    pub tab_size: Option<TabSize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rewrite each input file instead of writing to stdout
    #[arg(long)]
    pub in_place: bool,
}

impl ExpandArgs {
    /// Execute the expand command
    pub fn execute(&self) -> Result<ExitCode> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let tab_size = self.tab_size.unwrap_or(config.expand.tab_size);
        // The config default only applies to file inputs; stdin still goes to stdout
        let in_place = self.in_place
            || (config.output.in_place && self.output.is_none() && !self.input.is_empty());
        let expander = TabExpander::new(tab_size);

        log::info!("Expanding tabs with tab size {}", tab_size);

        let sources = InputSource::from_patterns(&self.input)?;

        let total = if in_place {
            Self::expand_in_place(&expander, &sources)?
        } else {
            Self::expand_to_output(&expander, &sources, self.output.as_deref())?
        };

        log::info!(
            "Replaced {} tab(s) on {} of {} line(s)",
            total.tabs,
            total.expanded_lines,
            total.lines
        );

        Ok(ExitCode::SUCCESS)
    }

    /// Expand all sources into a single output stream
    ///
    /// Every source is read before the output is created, so `-o` may name
    /// one of the inputs.
    fn expand_to_output(
        expander: &TabExpander,
        sources: &[InputSource],
        output: Option<&Path>,
    ) -> Result<DocumentStats> {
        let texts = sources
            .iter()
            .map(InputSource::read_text)
            .collect::<Result<Vec<_>>>()?;

        let mut sink = TextSink::create(output)?;
        let mut total = DocumentStats::default();

        for (source, text) in sources.iter().zip(&texts) {
            let stats = expand_document(expander, text, &mut sink)?;
            log::debug!("{}: {} tab(s) replaced", source, stats.tabs);
            total.merge(stats);
        }

        sink.finish()?;
        Ok(total)
    }

    /// Rewrite each source file that contains tabs
    fn expand_in_place(expander: &TabExpander, sources: &[InputSource]) -> Result<DocumentStats> {
        let mut total = DocumentStats::default();

        for source in sources {
            let InputSource::File(path) = source else {
                return Err(
                    CliError::ConfigError("--in-place requires input files".to_string()).into(),
                );
            };

            let text = FileReader::read_text(path)?;
            let mut sink = TextSink::new(Vec::with_capacity(text.len()));
            let stats = expand_document(expander, &text, &mut sink)?;

            if stats.changed() {
                let expanded = String::from_utf8(sink.into_inner())?;
                FileReader::write_text(path, &expanded)?;
                log::info!("{}: {} tab(s) replaced", source, stats.tabs);
            } else {
                log::debug!("{}: no tabs, left untouched", source);
            }

            total.merge(stats);
        }

        Ok(total)
    }
}
