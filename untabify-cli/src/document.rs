//! Line-by-line processing of whole documents
//!
//! The core expander works on one line at a time; this module splits a
//! document into lines (each keeping its `\n` or `\r\n` terminator) and feeds
//! them through it.

use crate::output::OutputSink;
use anyhow::Result;
use std::borrow::Cow;
use untabify_core::TabExpander;

/// Counters collected while expanding a document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of lines read
    pub lines: usize,
    /// Number of lines that contained at least one tab
    pub expanded_lines: usize,
    /// Number of tabs replaced
    pub tabs: usize,
}

impl DocumentStats {
    /// Whether any tab was replaced
    pub fn changed(&self) -> bool {
        self.tabs > 0
    }

    /// Accumulate counters from another document
    pub fn merge(&mut self, other: DocumentStats) {
        self.lines += other.lines;
        self.expanded_lines += other.expanded_lines;
        self.tabs += other.tabs;
    }
}

/// Position of a tab in the unexpanded text, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabLocation {
    /// Line number
    pub line: usize,
    /// Column in characters
    pub column: usize,
}

/// Split text into lines, each keeping its terminator
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
}

/// Expand every line of `text` into `sink`
pub fn expand_document(
    expander: &TabExpander,
    text: &str,
    sink: &mut dyn OutputSink,
) -> Result<DocumentStats> {
    let mut stats = DocumentStats::default();

    for line in lines(text) {
        stats.lines += 1;
        let expanded = expander.expand(line);
        if let Cow::Owned(_) = expanded {
            stats.expanded_lines += 1;
            stats.tabs += line.matches('\t').count();
        }
        sink.write_line(&expanded)?;
    }

    Ok(stats)
}

/// Locate every tab in `text`
pub fn find_tabs(text: &str) -> Vec<TabLocation> {
    lines(text)
        .enumerate()
        .flat_map(|(index, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == '\t')
                .map(move |(column, _)| TabLocation {
                    line: index + 1,
                    column: column + 1,
                })
        })
        .collect()
}
