//! Configuration management for the resume optimizer

use crate::error::{Result, ResumeOptimizerError};
use crate::processing::keywords::DEFAULT_VOCABULARY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub scoring: ScoringConfig,
    pub progress: ProgressConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points_per_match: u32,
    pub max_score: u8,
    pub missing_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub enabled: bool,
    pub steps: u64,
    /// Artificial pause between progress steps, in milliseconds.
    pub step_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub download_format: DownloadFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    Text,
    Pdf,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            terms: DEFAULT_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_match: 15,
            max_score: 100,
            missing_limit: 3,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            steps: 100,
            step_delay_ms: 0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            download_format: DownloadFormat::Text,
        }
    }
}

impl Config {
    /// Load the configuration from `path`, or from the default location when
    /// no path is given. A missing file is created with defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Self::reset(&config_path)
        }
    }

    /// Overwrite `config_path` with defaults. The existing file is never read.
    pub fn reset(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(config_path)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ResumeOptimizerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-optimizer")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.vocabulary.terms.len(), 7);
        assert_eq!(config.vocabulary.terms[0], "Python");
        assert_eq!(config.scoring.points_per_match, 15);
        assert_eq!(config.scoring.max_score, 100);
        assert_eq!(config.scoring.missing_limit, 3);
        assert_eq!(config.progress.step_delay_ms, 0);
        assert_eq!(config.output.download_format, DownloadFormat::Text);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = Config::from_toml("[output]\nformat = \"json\"\ncolor_output = false\ndownload_format = \"pdf\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.download_format, DownloadFormat::Pdf);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.vocabulary, VocabularyConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_remaining_defaults() {
        let config = Config::from_toml("[scoring]\npoints_per_match = 20\n\n[progress]\nstep_delay_ms = 5\n").unwrap();
        assert_eq!(config.scoring.points_per_match, 20);
        assert_eq!(config.scoring.max_score, 100);
        assert_eq!(config.scoring.missing_limit, 3);
        assert!(config.progress.enabled);
        assert_eq!(config.progress.steps, 100);
        assert_eq!(config.progress.step_delay_ms, 5);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let result = Config::from_toml("scoring = 12");
        assert!(matches!(result, Err(ResumeOptimizerError::Configuration(_))));
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let reloaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_reset_recovers_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\npoints_per_match = ").unwrap();

        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ResumeOptimizerError::Configuration(_))
        ));

        let config = Config::reset(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load(Some(path.as_path())).unwrap(), Config::default());
    }
}
