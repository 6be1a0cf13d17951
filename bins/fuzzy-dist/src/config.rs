//! Configuration for the fuzzy-dist CLI
//!
//! Settings come from an optional TOML file, overridden by command-line
//! flags and their environment variables.

use anyhow::{bail, Context, Result};
use fuzzy_distance::Metric;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default cap on input length, in code points.
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Configuration file schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    /// Metrics computed when none are requested on the command line
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,

    /// Maximum input length in code points
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for ConfigSchema {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            max_chars: default_max_chars(),
            format: OutputFormat::default(),
        }
    }
}

fn default_metrics() -> Vec<Metric> {
    Metric::ALL.to_vec()
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path, a standard location, or defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        if schema.metrics.is_empty() {
            bail!("Configuration must list at least one metric");
        }

        tracing::debug!(path = ?config_path, "configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Effective settings after applying command-line overrides
#[derive(Debug, Clone)]
pub struct Settings {
    pub metrics: Vec<Metric>,
    pub max_chars: usize,
    pub format: OutputFormat,
}

impl Settings {
    /// Merge overrides on top of the loaded configuration
    pub fn resolve(config: &Config, max_chars: Option<usize>, format: Option<OutputFormat>) -> Self {
        Self {
            metrics: config.schema.metrics.clone(),
            max_chars: max_chars.unwrap_or(config.schema.max_chars),
            format: format.unwrap_or(config.schema.format),
        }
    }

    /// Metrics to compute: the requested ones, or the configured default.
    /// Duplicates are dropped, first occurrence wins.
    pub fn select_metrics(&self, requested: &[Metric]) -> Vec<Metric> {
        let source = if requested.is_empty() { self.metrics.as_slice() } else { requested };

        let mut selected = Vec::with_capacity(source.len());
        for metric in source {
            if !selected.contains(metric) {
                selected.push(*metric);
            }
        }
        selected
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".fuzzy-dist.toml", "fuzzy-dist.toml", ".config/fuzzy-dist.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_schema_defaults() {
        let schema = ConfigSchema::default();
        assert_eq!(schema.metrics, vec![Metric::Levenshtein, Metric::Osa]);
        assert_eq!(schema.max_chars, DEFAULT_MAX_CHARS);
        assert_eq!(schema.format, OutputFormat::Text);
    }

    #[test]
    fn test_schema_partial_toml() {
        let schema: ConfigSchema = toml::from_str("max_chars = 42").unwrap();
        assert_eq!(schema.max_chars, 42);
        assert_eq!(schema.metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_schema_full_toml() {
        let schema: ConfigSchema =
            toml::from_str("metrics = [\"osa\"]\nmax_chars = 10\nformat = \"json\"").unwrap();
        assert_eq!(schema.metrics, vec![Metric::Osa]);
        assert_eq!(schema.max_chars, 10);
        assert_eq!(schema.format, OutputFormat::Json);
    }

    #[test]
    fn test_schema_rejects_unknown_metric() {
        assert!(toml::from_str::<ConfigSchema>("metrics = [\"jaro\"]").is_err());
    }

    #[test]
    fn test_config_load_explicit_path() {
        let file = write_config("metrics = [\"levenshtein\"]");
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.schema.metrics, vec![Metric::Levenshtein]);
        assert_eq!(config.path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/fuzzy-dist.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_empty_metrics() {
        let file = write_config("metrics = []");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("at least one metric"));
    }

    #[test]
    fn test_settings_overrides() {
        let config = Config {
            schema: ConfigSchema::default(),
            path: None,
        };
        let settings = Settings::resolve(&config, Some(5), Some(OutputFormat::Json));
        assert_eq!(settings.max_chars, 5);
        assert_eq!(settings.format, OutputFormat::Json);

        let settings = Settings::resolve(&config, None, None);
        assert_eq!(settings.max_chars, DEFAULT_MAX_CHARS);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_select_metrics() {
        let config = Config {
            schema: ConfigSchema::default(),
            path: None,
        };
        let settings = Settings::resolve(&config, None, None);
        assert_eq!(settings.select_metrics(&[]), Metric::ALL.to_vec());
        assert_eq!(
            settings.select_metrics(&[Metric::Osa, Metric::Osa, Metric::Levenshtein]),
            vec![Metric::Osa, Metric::Levenshtein]
        );
    }
}
