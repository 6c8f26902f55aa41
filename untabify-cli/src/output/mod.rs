//! Output module

use anyhow::Result;

/// Trait for line sinks
pub trait OutputSink {
    /// Write one line, including its terminator if it had one
    fn write_line(&mut self, line: &str) -> Result<()>;

    /// Finalize output (flush buffers)
    fn finish(&mut self) -> Result<()>;
}

pub mod text;

pub use text::TextSink;
