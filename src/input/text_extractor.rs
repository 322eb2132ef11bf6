//! Text extraction from various file formats

use crate::error::{Result, ResumeOptimizerError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeOptimizerError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        markdown_to_text(&markdown_content)
    }
}

/// Render markdown and strip the markup, one trimmed line per block.
pub fn markdown_to_text(markdown: &str) -> Result<String> {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let tags = Regex::new(r"<[^>]*>")
        .map_err(|e| ResumeOptimizerError::Processing(format!("Invalid markup pattern: {}", e)))?;

    let text = html_output
        .replace("<br>", "\n")
        .replace("<br />", "\n")
        .replace("</p>", "\n\n");
    let stripped = tags.replace_all(&text, "");

    // Entities last, so escaped angle brackets survive as text.
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    let lines: Vec<&str> = decoded
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_markup() {
        let text = markdown_to_text("# Sam Park\n\n**Skills:** Python &amp; SQL\n\n- AWS\n- `TensorFlow`\n").unwrap();
        assert!(text.contains("Sam Park"));
        assert!(text.contains("Skills: Python & SQL"));
        assert!(text.contains("AWS"));
        assert!(text.contains("TensorFlow"));
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
        assert!(!text.contains("<li>"));
    }

    #[test]
    fn test_markdown_escaped_brackets_survive() {
        let text = markdown_to_text("Use a &lt;b&gt; tag").unwrap();
        assert_eq!(text, "Use a <b> tag");
    }
}
