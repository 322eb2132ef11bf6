//! Report structure rendered by the output formatters

use crate::output::artifact::ArtifactSummary;
use crate::processing::analyzer::{AnalysisReport, ResumeReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one CLI action produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub job_analysis: Option<AnalysisReport>,
    pub resume_analysis: Option<ResumeReport>,
    pub download: Option<ArtifactSummary>,
    /// User-facing warning, set when an action could not run.
    pub warning: Option<String>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub optimizer_version: String,
    pub job_source: Option<String>,
    pub resume_source: Option<String>,
    pub vocabulary_size: usize,
}

impl OptimizationReport {
    pub fn new(vocabulary_size: usize) -> Self {
        Self {
            job_analysis: None,
            resume_analysis: None,
            download: None,
            warning: None,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                optimizer_version: env!("CARGO_PKG_VERSION").to_string(),
                job_source: None,
                resume_source: None,
                vocabulary_size,
            },
        }
    }

    pub fn with_sources(mut self, job: Option<String>, resume: Option<String>) -> Self {
        self.metadata.job_source = job;
        self.metadata.resume_source = resume;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.job_analysis.is_none() && self.resume_analysis.is_none() && self.warning.is_none()
    }
}

/// Label shown next to the match potential metric.
pub fn match_verdict(percentage: u8) -> &'static str {
    match percentage {
        75.. => "Strong",
        45..=74 => "Good",
        15..=44 => "Fair",
        _ => "Low",
    }
}
