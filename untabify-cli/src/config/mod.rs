//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use untabify_core::TabSize;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Expansion configuration
    #[serde(default)]
    pub expand: ExpandConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Expansion-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExpandConfig {
    /// Width of a tab stop (1-8)
    pub tab_size: TabSize,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Rewrite input files instead of writing to stdout
    pub in_place: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration if a path is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("untabify.toml");
        fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.expand.tab_size, TabSize::DEFAULT);
        assert!(!config.output.in_place);
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r#"
[expand]
tab_size = 8

[output]
in_place = true
"#,
        );

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.expand.tab_size.get(), 8);
        assert!(config.output.in_place);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let (_dir, path) = write_config("[output]\n");

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_out_of_range_tab_size_rejected() {
        let (_dir, path) = write_config("[expand]\ntab_size = 9\n");

        let err = CliConfig::load(&path).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/untabify.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(CliConfig::load_or_default(None).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = CliConfig {
            expand: ExpandConfig {
                tab_size: TabSize::new(2).unwrap(),
            },
            output: OutputConfig { in_place: true },
        };

        let text = toml::to_string(&config).unwrap();
        let (_dir, path) = write_config(&text);
        assert_eq!(CliConfig::load(&path).unwrap(), config);
    }
}
