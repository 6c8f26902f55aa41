//! Plain text output sink

use super::OutputSink;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Plain text sink - writes lines exactly as given
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    /// Create a new text sink
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextSink<Box<dyn Write>> {
    /// Create a sink for the given file, or stdout when no path is given
    pub fn create(path: Option<&Path>) -> Result<Self> {
        let writer: Box<dyn Write> = match path {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(Self::new(writer))
    }
}

impl<W: Write> OutputSink for TextSink<W> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lines_written_verbatim() {
        let mut sink = TextSink::new(Vec::new());
        sink.write_line("    a\n").unwrap();
        sink.write_line("b\r\n").unwrap();
        sink.write_line("no newline").unwrap();
        sink.finish().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "    a\nb\r\nno newline");
    }

    #[test]
    fn test_create_file_sink() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        let mut sink = TextSink::create(Some(&path)).unwrap();
        sink.write_line("x   y\n").unwrap();
        sink.finish().unwrap();
        drop(sink);

        assert_eq!(fs::read_to_string(&path).unwrap(), "x   y\n");
    }

    #[test]
    fn test_create_in_missing_directory() {
        let err = TextSink::create(Some(Path::new("/nonexistent/dir/out.txt"))).err();
        assert!(err
            .unwrap()
            .to_string()
            .contains("Failed to create output file"));
    }
}
