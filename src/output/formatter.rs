//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{Result, ResumeOptimizerError};
use crate::output::gauge::render_gauge;
use crate::output::report::{match_verdict, OptimizationReport};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const GAUGE_WIDTH: usize = 30;

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Analyze Job Description",
        "The job description is scanned for the key skills in the vocabulary.",
    ),
    (
        "Evaluate Your Resume",
        "Your resume is compared against the job requirements to find gaps and opportunities.",
    ),
    (
        "Get Tailored Suggestions",
        "Receive specific recommendations to optimize your resume for each application.",
    ),
];

/// Trait for formatting optimization reports
pub trait OutputFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Optimizer Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; color: #2c3e50; max-width: 900px; margin: 0 auto; padding: 20px; background: #f5f7fa; }
        .card { background: white; border-radius: 10px; padding: 20px; margin-bottom: 20px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
        h1 { border-bottom: 2px solid #3498db; padding-bottom: 10px; }
        .metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }
        .metric { text-align: center; }
        .metric strong { display: block; font-size: 1.6em; }
        .gauge { background: #e0e0e0; border-radius: 6px; height: 32px; }
        .gauge-fill { background: #4CAF50; height: 32px; border-radius: 6px; color: white; font-weight: bold; text-align: center; line-height: 32px; }
        .warning { background: #fff3cd; border-left: 4px solid #ffc107; }
        footer { text-align: center; color: #7f8c8d; font-size: 0.9rem; }
    </style>
    {% endif %}
</head>
<body>
    <h1>📄 Resume Optimizer</h1>
    <p>Generated: {{ generated_at }}</p>
    {% if has_warning %}
    <div class="card warning"><p>⚠️ {{ warning }}</p></div>
    {% endif %}
    {% if has_job %}
    <div class="card">
        <h2>🔍 Job Description Insights</h2>
        <div class="metrics">
            <div class="metric">Match Potential<strong>{{ match_percentage }}%</strong>{{ match_label }}</div>
            <div class="metric">Key Skills<strong>{{ matched_count }}</strong>Matched</div>
            <div class="metric">Tone Match<strong>{{ tone_label }}</strong></div>
        </div>
        <h3>🔑 Key Skills Analysis</h3>
        <p><strong>Matched Keywords:</strong> {{ matched_keywords }}</p>
        <p><strong>Skills to Add:</strong> {{ missing_keywords }}</p>
        <p><strong>Complexity:</strong> {{ complexity }}</p>
        <h3>💡 Optimization Suggestions</h3>
        <ol>
        {% for suggestion in suggestions %}
            <li>{{ suggestion }}</li>
        {% endfor %}
        </ol>
    </div>
    {% endif %}
    {% if has_resume %}
    <div class="card">
        <h2>🚀 Resume Score</h2>
        <div class="gauge"><div class="gauge-fill" style="width: {{ resume_score }}%">{{ resume_score }}%</div></div>
        <p>Resume Match Score</p>
        <h3>✅ Strengths</h3>
        <ul>
        {% for strength in strengths %}
            <li>{{ strength }}</li>
        {% endfor %}
        </ul>
        <h3>⚠️ Weaknesses</h3>
        <ul>
        {% for weakness in weaknesses %}
            <li>{{ weakness }}</li>
        {% endfor %}
        </ul>
        <h3>💡 Optimization Tips</h3>
        <ol>
        {% for tip in tips %}
            <li>{{ tip }}</li>
        {% endfor %}
        </ol>
    </div>
    {% endif %}
    {% if has_download %}
    <div class="card">
        <h2>📥 Download Optimized Resume</h2>
        <p>{{ download_name }} ({{ download_type }}, {{ download_size }} bytes)</p>
    </div>
    {% endif %}
    <footer>Resume Optimizer v{{ version }}</footer>
</body>
</html>"#
)]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    version: String,
    has_warning: bool,
    warning: String,
    has_job: bool,
    match_percentage: u8,
    match_label: String,
    matched_count: usize,
    tone_label: String,
    matched_keywords: String,
    missing_keywords: String,
    complexity: String,
    suggestions: Vec<String>,
    has_resume: bool,
    resume_score: u8,
    strengths: Vec<String>,
    weaknesses: Vec<String>,
    tips: Vec<String>,
    has_download: bool,
    download_name: String,
    download_type: String,
    download_size: usize,
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn format_timestamp(report: &OptimizationReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME OPTIMIZER", 1));
        output.push_str("Enhance your resume to match job descriptions\n");

        if let Some(warning) = &report.warning {
            output.push_str(&format!("\n⚠️  {}\n", self.colorize(warning, Color::Yellow)));
        }

        if let Some(job) = &report.job_analysis {
            output.push_str(&self.format_header("Job Description Insights", 2));
            output.push_str(&format!("Match Potential: {}% ({})\n",
                job.match_percentage,
                match_verdict(job.match_percentage)
            ));
            output.push_str(&format!("Key Skills: {} matched\n", job.matched_keywords.len()));
            output.push_str(&format!("Tone Match: {}\n", self.colorize(job.tone_label(), Color::Cyan)));
            output.push_str(&format!("Complexity: {}\n", job.complexity));

            output.push_str(&self.format_header("🔑 Key Skills Analysis", 3));
            output.push_str(&format!("Matched Keywords: {}\n",
                self.colorize(&join_or_none(&job.matched_keywords), Color::Green)
            ));
            output.push_str(&format!("Skills to Add: {}\n",
                self.colorize(&join_or_none(&job.missing_keywords), Color::Yellow)
            ));

            output.push_str(&self.format_header("💡 Optimization Suggestions", 3));
            for (i, suggestion) in job.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        if let Some(resume) = &report.resume_analysis {
            output.push_str(&self.format_header("🚀 Resume Score", 2));
            output.push_str(&format!("{}\n", self.colorize(&render_gauge(resume.score, GAUGE_WIDTH), Color::Green)));
            output.push_str("Resume Match Score\n");

            output.push_str(&self.format_header("✅ Strengths", 3));
            for strength in &resume.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }

            output.push_str(&self.format_header("⚠️  Weaknesses", 3));
            for weakness in &resume.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }

            output.push_str(&self.format_header("💡 Optimization Tips", 3));
            for (i, tip) in resume.optimization_tips.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, tip));
            }
        }

        if let Some(download) = &report.download {
            output.push_str(&self.format_header("📥 Download Optimized Resume", 2));
            output.push_str(&format!("{} ({}, {} bytes)\n",
                download.file_name, download.content_type, download.size_bytes
            ));
            match &download.saved_to {
                Some(path) => output.push_str(&format!("Saved to: {}\n", path)),
                None => output.push_str("💡 Use --download <PATH> to save it\n"),
            }
        }

        output.push_str(&self.format_header("How It Works", 2));
        for (i, (title, description)) in HOW_IT_WORKS.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n     {}\n", i + 1, title, description));
        }

        output.push_str(&format!("\n{} Resume Optimizer v{} | {} | Vocabulary: {} terms\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.optimizer_version,
            format_timestamp(report),
            report.metadata.vocabulary_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📄 Resume Optimizer Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n\n", format_timestamp(report)));
        }

        if let Some(warning) = &report.warning {
            output.push_str(&format!("> ⚠️ {}\n\n", warning));
        }

        if let Some(job) = &report.job_analysis {
            output.push_str("## 🔍 Job Description Insights\n\n");
            output.push_str("| Metric | Value |\n");
            output.push_str("|--------|-------|\n");
            output.push_str(&format!("| Match Potential | {}% ({}) |\n",
                job.match_percentage,
                match_verdict(job.match_percentage)
            ));
            output.push_str(&format!("| Key Skills | {} matched |\n", job.matched_keywords.len()));
            output.push_str(&format!("| Tone Match | {} |\n\n", job.tone_label()));

            output.push_str("### 🔑 Key Skills Analysis\n\n");
            output.push_str(&format!("**Matched Keywords:** {}\n\n", join_or_none(&job.matched_keywords)));
            output.push_str(&format!("**Skills to Add:** {}\n\n", join_or_none(&job.missing_keywords)));

            output.push_str("### 💡 Optimization Suggestions\n\n");
            for (i, suggestion) in job.suggestions.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, suggestion));
            }
            output.push('\n');
        }

        if let Some(resume) = &report.resume_analysis {
            output.push_str("## 🚀 Resume Score\n\n");
            output.push_str(&format!("`{}`\n\n", render_gauge(resume.score, GAUGE_WIDTH)));

            output.push_str("### ✅ Strengths\n\n");
            for strength in &resume.strengths {
                output.push_str(&format!("- {}\n", strength));
            }
            output.push_str("\n### ⚠️ Weaknesses\n\n");
            for weakness in &resume.weaknesses {
                output.push_str(&format!("- {}\n", weakness));
            }
            output.push_str("\n### 💡 Optimization Tips\n\n");
            for (i, tip) in resume.optimization_tips.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, tip));
            }
            output.push('\n');
        }

        if let Some(download) = &report.download {
            output.push_str("## 📥 Download Optimized Resume\n\n");
            output.push_str(&format!("`{}` ({}, {} bytes)\n\n",
                download.file_name, download.content_type, download.size_bytes
            ));
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by Resume Optimizer v{}*\n", report.metadata.optimizer_version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &OptimizationReport) -> HtmlTemplate {
        let job = report.job_analysis.as_ref();
        let resume = report.resume_analysis.as_ref();
        let download = report.download.as_ref();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            version: report.metadata.optimizer_version.clone(),
            has_warning: report.warning.is_some(),
            warning: report.warning.clone().unwrap_or_default(),
            has_job: job.is_some(),
            match_percentage: job.map(|j| j.match_percentage).unwrap_or(0),
            match_label: job.map(|j| match_verdict(j.match_percentage)).unwrap_or_default().to_string(),
            matched_count: job.map(|j| j.matched_keywords.len()).unwrap_or(0),
            tone_label: job.map(|j| j.tone_label().to_string()).unwrap_or_default(),
            matched_keywords: job.map(|j| join_or_none(&j.matched_keywords)).unwrap_or_default(),
            missing_keywords: job.map(|j| join_or_none(&j.missing_keywords)).unwrap_or_default(),
            complexity: job.map(|j| j.complexity.clone()).unwrap_or_default(),
            suggestions: job.map(|j| j.suggestions.clone()).unwrap_or_default(),
            has_resume: resume.is_some(),
            resume_score: resume.map(|r| r.score.min(100)).unwrap_or(0),
            strengths: resume.map(|r| r.strengths.clone()).unwrap_or_default(),
            weaknesses: resume.map(|r| r.weaknesses.clone()).unwrap_or_default(),
            tips: resume.map(|r| r.optimization_tips.clone()).unwrap_or_default(),
            has_download: download.is_some(),
            download_name: download.map(|d| d.file_name.clone()).unwrap_or_default(),
            download_type: download.map(|d| d.content_type.clone()).unwrap_or_default(),
            download_size: download.map(|d| d.size_bytes).unwrap_or(0),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &OptimizationReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeOptimizerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true)
    }

    pub fn with_options(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &OptimizationReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(file_path, content)?;
    Ok(())
}
