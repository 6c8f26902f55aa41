//! Classify command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::process::ExitCode;
use untabify_core::is_ascii_symbol;

/// Arguments for the classify command
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(value_name = "TEXT")]
    pub text: String,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<ExitCode> {
        let mut stdout = io::stdout().lock();
        write_classification(&mut stdout, &self.text)?;
        stdout.flush()?;
        Ok(ExitCode::SUCCESS)
    }
}

/// One row per character: code point, escaped character, class
fn write_classification<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    for c in text.chars() {
        let class = if is_ascii_symbol(c) { "symbol" } else { "literal" };
        writeln!(writer, "U+{:04X}  {:<8}  {}", c as u32, format!("{c:?}"), class)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> String {
        let mut out = Vec::new();
        write_classification(&mut out, text).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_classify_rows() {
        assert_eq!(
            classify("#A"),
            "U+0023  '#'       symbol\nU+0041  'A'       literal\n"
        );
    }

    #[test]
    fn test_classify_escapes_control_characters() {
        let out = classify("\n");
        assert!(out.starts_with("U+000A  '\\n'"));
        assert!(out.trim_end().ends_with("literal"));
    }

    #[test]
    fn test_classify_non_ascii() {
        let out = classify("→");
        assert!(out.starts_with("U+2192"));
        assert!(out.trim_end().ends_with("literal"));
    }
}
