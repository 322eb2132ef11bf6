//! Downloadable resume artifact
//!
//! The declared file name and content type always describe the bytes that are
//! actually produced: plain text stays `text/plain`, and `application/pdf` is
//! only used for a rendered PDF document.

use crate::config::DownloadFormat;
use crate::error::{Result, ResumeOptimizerError};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use serde::{Deserialize, Serialize};
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const TEXT_FILE_NAME: &str = "optimized_resume.txt";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const PDF_FILE_NAME: &str = "optimized_resume.pdf";
const PDF_CONTENT_TYPE: &str = "application/pdf";

// A4 portrait, Courier 10pt.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_LEFT_MM: f32 = 15.0;
const MARGIN_TOP_MM: f32 = 280.0;
const MARGIN_BOTTOM_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 4.5;
const FONT_SIZE_PT: f32 = 10.0;
const MAX_LINE_CHARS: usize = 90;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Artifact description without its payload, for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSummary {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub saved_to: Option<String>,
}

impl DownloadArtifact {
    pub fn from_resume(resume_text: &str, format: DownloadFormat) -> Result<Self> {
        match format {
            DownloadFormat::Text => Ok(Self {
                file_name: TEXT_FILE_NAME.to_string(),
                content_type: TEXT_CONTENT_TYPE.to_string(),
                bytes: resume_text.as_bytes().to_vec(),
            }),
            DownloadFormat::Pdf => Ok(Self {
                file_name: PDF_FILE_NAME.to_string(),
                content_type: PDF_CONTENT_TYPE.to_string(),
                bytes: render_pdf("Optimized Resume", resume_text)?,
            }),
        }
    }

    pub fn summary(&self, saved_to: Option<&Path>) -> ArtifactSummary {
        ArtifactSummary {
            file_name: self.file_name.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.bytes.len(),
            saved_to: saved_to.map(|p| p.display().to_string()),
        }
    }

    /// Write the artifact. A directory target receives the artifact's own file name.
    pub async fn write_to(&self, target: &Path) -> Result<std::path::PathBuf> {
        let path = if target.is_dir() {
            target.join(&self.file_name)
        } else {
            target.to_path_buf()
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&path, &self.bytes).await?;
        Ok(path)
    }
}

fn render_pdf(title: &str, text: &str) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Resume");
    let font = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| ResumeOptimizerError::PdfRendering(e.to_string()))?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut y = MARGIN_TOP_MM;

    for line in text.lines().flat_map(wrap_line) {
        if y < MARGIN_BOTTOM_MM {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Resume");
            current_layer = doc.get_page(next_page).get_layer(next_layer);
            y = MARGIN_TOP_MM;
        }
        current_layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_LEFT_MM), Mm(y), &font);
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes()
        .map_err(|e| ResumeOptimizerError::PdfRendering(e.to_string()))
}

fn wrap_line(line: &str) -> Vec<String> {
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    if graphemes.is_empty() {
        return vec![String::new()];
    }
    graphemes
        .chunks(MAX_LINE_CHARS)
        .map(|chunk| chunk.concat())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_artifact_is_verbatim() {
        let resume = "Jane Roe\n\nSKILLS\n- Python, SQL ✓\r\n";
        let artifact = DownloadArtifact::from_resume(resume, DownloadFormat::Text).unwrap();
        assert_eq!(artifact.bytes, resume.as_bytes());
        assert_eq!(artifact.file_name, "optimized_resume.txt");
        assert!(artifact.content_type.starts_with("text/plain"));
    }

    #[test]
    fn test_empty_text_artifact() {
        let artifact = DownloadArtifact::from_resume("", DownloadFormat::Text).unwrap();
        assert!(artifact.bytes.is_empty());
        assert_eq!(artifact.summary(None).size_bytes, 0);
    }

    #[test]
    fn test_pdf_artifact_is_real_pdf() {
        let resume = (0..150).map(|i| format!("Line {}", i)).collect::<Vec<_>>().join("\n");
        let artifact = DownloadArtifact::from_resume(&resume, DownloadFormat::Pdf).unwrap();
        assert_eq!(artifact.file_name, "optimized_resume.pdf");
        assert_eq!(artifact.content_type, "application/pdf");
        assert!(artifact.bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line(""), vec![String::new()]);
        let long = "x".repeat(MAX_LINE_CHARS + 5);
        let wrapped = wrap_line(&long);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[1], "xxxxx");
    }

    #[tokio::test]
    async fn test_write_to_directory_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = DownloadArtifact::from_resume("hello", DownloadFormat::Text).unwrap();

        let path = artifact.write_to(dir.path()).await.unwrap();
        assert_eq!(path, dir.path().join("optimized_resume.txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }
}
