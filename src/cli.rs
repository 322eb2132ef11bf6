//! CLI interface for the resume optimizer

use crate::config::{DownloadFormat, OutputFormat};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-optimizer")]
#[command(about = "Match a resume against a job description and get optimization suggestions")]
#[command(long_about = "Scan a job description for key skills, score the match, review resume strengths and weaknesses, and export the resume")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: console, json, markdown, html
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Save the rendered report to a file
    #[arg(short, long, global = true)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job description for key skills
    AnalyzeJob {
        /// Path to job description file (TXT, MD), or - for stdin
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description text
        #[arg(long)]
        job_text: Option<String>,
    },

    /// Analyze and optimize a resume against a job description
    Optimize {
        /// Path to job description file (TXT, MD), or - for stdin
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description text
        #[arg(long)]
        job_text: Option<String>,

        /// Path to resume file (PDF, TXT, MD), or - for stdin
        #[arg(short, long, conflicts_with = "resume_text")]
        resume: Option<PathBuf>,

        /// Resume text
        #[arg(long)]
        resume_text: Option<String>,

        /// Write the optimized resume to this file or directory
        #[arg(short, long)]
        download: Option<PathBuf>,

        /// Download format: text, pdf
        #[arg(long)]
        download_format: Option<String>,
    },

    /// Print a built-in sample text
    Sample {
        #[arg(value_enum)]
        kind: SampleKind,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Resume,
    Job,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Parse and validate download format
pub fn parse_download_format(format: &str) -> Result<DownloadFormat, String> {
    match format.to_lowercase().as_str() {
        "text" | "txt" => Ok(DownloadFormat::Text),
        "pdf" => Ok(DownloadFormat::Pdf),
        _ => Err(format!("Invalid download format: {}. Supported: text, pdf", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_optimize_args() {
        let cli = Cli::try_parse_from([
            "resume-optimizer", "optimize", "--job-text", "Python role", "-r", "cv.md", "--download-format", "pdf", "-o", "json",
        ])
        .unwrap();
        assert_eq!(cli.output.as_deref(), Some("json"));
        match cli.command {
            Commands::Optimize { job, job_text, resume, download_format, .. } => {
                assert!(job.is_none());
                assert_eq!(job_text.as_deref(), Some("Python role"));
                assert_eq!(resume, Some(PathBuf::from("cv.md")));
                assert_eq!(download_format.as_deref(), Some("pdf"));
            }
            _ => panic!("expected optimize"),
        }
    }

    #[test]
    fn test_job_and_job_text_conflict() {
        let result = Cli::try_parse_from(["resume-optimizer", "analyze-job", "-j", "job.txt", "--job-text", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert!(parse_output_format("pdf").is_err());
        assert_eq!(parse_download_format("txt"), Ok(DownloadFormat::Text));
        assert_eq!(parse_download_format("PDF"), Ok(DownloadFormat::Pdf));
        assert!(parse_download_format("docx").is_err());
    }
}
