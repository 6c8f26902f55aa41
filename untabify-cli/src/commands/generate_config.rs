//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;
use untabify_core::TabSize;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "untabify.toml")]
    pub output: PathBuf,

    /// Tab size written into the template
    #[arg(short, long, value_name = "N", default_value_t = TabSize::DEFAULT)]
    pub tab_size: TabSize,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<ExitCode> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   untabify expand -i '*.md' --config {}",
            self.output.display()
        );

        Ok(ExitCode::SUCCESS)
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# untabify configuration

[expand]
# Width of a tab stop, between 1 and 8.
# A tab moves the column to the next multiple of this value.
# Overridden by --tab-size and the UNTABIFY_TAB_SIZE environment variable.
tab_size = {}

[output]
# Rewrite input files instead of writing to stdout
in_place = false
"#,
            self.tab_size
        )
    }
}
