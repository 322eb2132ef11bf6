//! Application state and the two user actions: analyze and optimize

use crate::config::{DownloadFormat, ProgressConfig};
use crate::error::Result;
use crate::output::artifact::DownloadArtifact;
use crate::processing::analyzer::{AnalysisEngine, AnalysisReport, ResumeReport};
use crate::progress::ProgressReporter;
use log::{info, warn};
use std::time::Duration;

pub const MISSING_JOB_WARNING: &str = "Please enter a job description first";

/// Values owned by the shell between actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub job_description: String,
    pub resume_text: String,
    pub analysis_done: bool,
    pub job_report: Option<AnalysisReport>,
    pub resume_report: Option<ResumeReport>,
}

impl AppState {
    pub fn new(job_description: impl Into<String>, resume_text: impl Into<String>) -> Self {
        Self {
            job_description: job_description.into(),
            resume_text: resume_text.into(),
            ..Self::default()
        }
    }

    pub fn has_job_description(&self) -> bool {
        !self.job_description.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeOutcome {
    Optimized {
        report: ResumeReport,
        artifact: DownloadArtifact,
    },
    /// Nothing was computed; the message is shown to the user.
    MissingJobDescription { warning: String },
}

/// Drives the pure analysis engine on behalf of the shell.
pub struct Session {
    engine: AnalysisEngine,
    progress: ProgressConfig,
    download_format: DownloadFormat,
}

impl Session {
    pub fn new(engine: AnalysisEngine, progress: ProgressConfig, download_format: DownloadFormat) -> Self {
        Self {
            engine,
            progress,
            download_format,
        }
    }

    pub fn engine(&self) -> &AnalysisEngine {
        &self.engine
    }

    pub async fn analyze_job(&self, state: &mut AppState, reporter: &dyn ProgressReporter) -> AnalysisReport {
        info!("Analyzing job description ({} chars)", state.job_description.len());
        self.run_progress(reporter, "Analyzing job description...").await;

        let report = self.engine.analyze_job_description(&state.job_description);
        reporter.finish("Analysis complete!");

        state.job_report = Some(report.clone());
        state.analysis_done = true;
        report
    }

    pub async fn optimize_resume(&self, state: &mut AppState, reporter: &dyn ProgressReporter) -> Result<OptimizeOutcome> {
        if !state.has_job_description() {
            warn!("Optimize requested without a job description");
            return Ok(OptimizeOutcome::MissingJobDescription {
                warning: MISSING_JOB_WARNING.to_string(),
            });
        }

        info!("Optimizing resume ({} chars)", state.resume_text.len());
        // Captured before any waiting so the artifact reflects the action's input.
        let resume_text = state.resume_text.clone();
        self.run_progress(reporter, "Analyzing and optimizing your resume...").await;

        let report = self.engine.analyze_resume(&resume_text, &state.job_description);
        let artifact = DownloadArtifact::from_resume(&resume_text, self.download_format)?;
        reporter.finish("Resume analysis complete!");

        state.resume_report = Some(report.clone());
        state.analysis_done = true;
        Ok(OptimizeOutcome::Optimized { report, artifact })
    }

    async fn run_progress(&self, reporter: &dyn ProgressReporter, label: &str) {
        if !self.progress.enabled {
            return;
        }

        let steps = self.progress.steps.max(1);
        reporter.start(label, steps);
        for step in 1..=steps {
            if self.progress.step_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.progress.step_delay_ms)).await;
            }
            reporter.advance(step);
        }
    }
}
