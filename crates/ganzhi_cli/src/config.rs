//! CLI configuration loaded from an optional TOML file.

use std::path::{Path, PathBuf};

use ganzhi_base::TimelineConfig;
use serde::Deserialize;

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimelineSection {
    pub span_years: u16,
    pub first_age: u16,
}

impl Default for TimelineSection {
    fn default() -> Self {
        let d = TimelineConfig::default();
        Self {
            span_years: d.span_years,
            first_age: d.first_age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

/// Root of the `ganzhi` TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputSection,
    pub timeline: TimelineSection,
    pub log: LogSection,
}

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file {0}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

impl CliConfig {
    /// Load and validate a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeline.span_years == 0 {
            return Err(ConfigError::Invalid("timeline.span_years must be > 0".into()));
        }
        if self.timeline.first_age == 0 {
            return Err(ConfigError::Invalid("timeline.first_age must be >= 1".into()));
        }
        Ok(())
    }

    pub fn timeline_config(&self) -> TimelineConfig {
        TimelineConfig {
            first_age: self.timeline.first_age,
            span_years: self.timeline.span_years,
        }
    }
}
