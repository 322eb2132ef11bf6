//! Input manager for reading job descriptions and resumes

use crate::error::{Result, ResumeOptimizerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

/// Where a text input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl InputSource {
    /// Pick a source from the CLI's file and inline-text options.
    /// `-` as a path means standard input.
    pub fn from_args(path: Option<PathBuf>, text: Option<String>) -> Option<Self> {
        match (path, text) {
            (_, Some(text)) => Some(InputSource::Inline(text)),
            (Some(path), None) if path.as_os_str() == "-" => Some(InputSource::Stdin),
            (Some(path), None) => Some(InputSource::File(path)),
            (None, None) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::Inline(_) => "<inline>".to_string(),
        }
    }
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn read(&mut self, source: &InputSource) -> Result<String> {
        match source {
            InputSource::File(path) => self.extract_text(path).await,
            InputSource::Stdin => {
                debug!("Reading input from stdin");
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                Ok(buffer)
            }
            InputSource::Inline(text) => Ok(text.clone()),
        }
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeOptimizerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(ResumeOptimizerError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_args() {
        assert_eq!(InputSource::from_args(None, None), None);
        assert_eq!(
            InputSource::from_args(Some(PathBuf::from("-")), None),
            Some(InputSource::Stdin)
        );
        assert_eq!(
            InputSource::from_args(Some(PathBuf::from("job.txt")), Some("inline".to_string())),
            Some(InputSource::Inline("inline".to_string()))
        );
        assert_eq!(
            InputSource::from_args(Some(PathBuf::from("job.txt")), None),
            Some(InputSource::File(PathBuf::from("job.txt")))
        );
    }

    #[tokio::test]
    async fn test_inline_source_is_returned_verbatim() {
        let mut manager = InputManager::new();
        let text = "  Python\r\n\tAWS  ";
        let read = manager.read(&InputSource::Inline(text.to_string())).await.unwrap();
        assert_eq!(read, text);
        assert_eq!(manager.cache_size(), 0);
    }

    #[tokio::test]
    async fn test_cache_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, "first").unwrap();

        let mut manager = InputManager::new().with_cache(false);
        assert_eq!(manager.extract_text(&path).await.unwrap(), "first");

        std::fs::write(&path, "second").unwrap();
        assert_eq!(manager.extract_text(&path).await.unwrap(), "second");
        assert_eq!(manager.cache_size(), 0);
    }
}
