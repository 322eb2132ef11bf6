//! Integration tests for the resume optimizer

use resume_optimizer::config::{DownloadFormat, OutputFormat, ProgressConfig};
use resume_optimizer::input::{InputManager, InputSource};
use resume_optimizer::output::formatter::ReportGenerator;
use resume_optimizer::output::report::OptimizationReport;
use resume_optimizer::processing::analyzer::AnalysisEngine;
use resume_optimizer::progress::NoProgress;
use resume_optimizer::session::{AppState, OptimizeOutcome, Session, MISSING_JOB_WARNING};
use std::path::{Path, PathBuf};

fn quiet_session(download_format: DownloadFormat) -> Session {
    let progress = ProgressConfig {
        enabled: false,
        ..ProgressConfig::default()
    };
    Session::new(AnalysisEngine::default(), progress, download_format)
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Riley Chen"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("AWS"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Riley Chen"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python, SQL, Docker"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let source = InputSource::File(PathBuf::from("tests/fixtures/sample_resume.txt"));

    let text1 = manager.read(&source).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.read(&source).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/nonexistent.txt")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_job_file_end_to_end() {
    let mut manager = InputManager::new();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();
    let resume = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let session = quiet_session(DownloadFormat::Text);
    let mut state = AppState::new(job, resume.clone());

    let job_report = session.analyze_job(&mut state, &NoProgress).await;
    assert_eq!(
        job_report.matched_keywords,
        vec!["Python", "Data Analysis", "AWS", "SQL", "TensorFlow"]
    );
    assert_eq!(job_report.match_percentage, 75);
    assert_eq!(job_report.missing_keywords, vec!["Machine Learning", "Project Management"]);

    let outcome = session.optimize_resume(&mut state, &NoProgress).await.unwrap();
    let OptimizeOutcome::Optimized { report, artifact } = outcome else {
        panic!("expected an optimized resume");
    };
    assert_eq!(report.score, 78);
    assert_eq!(artifact.bytes, resume.as_bytes());
    assert!(state.analysis_done);
}

#[tokio::test]
async fn test_optimize_without_job_is_a_warning_not_an_error() {
    let session = quiet_session(DownloadFormat::Pdf);
    let mut state = AppState::new("", "resume text");

    let outcome = session.optimize_resume(&mut state, &NoProgress).await.unwrap();
    let OptimizeOutcome::MissingJobDescription { warning } = outcome else {
        panic!("expected a missing job description warning");
    };
    assert_eq!(warning, MISSING_JOB_WARNING);

    let mut report = OptimizationReport::new(7);
    report.warning = Some(warning);
    let rendered = ReportGenerator::with_options(false)
        .generate_report(&report, &OutputFormat::Console)
        .unwrap();
    assert!(rendered.contains(MISSING_JOB_WARNING));
}

#[tokio::test]
async fn test_pdf_download_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let session = quiet_session(DownloadFormat::Pdf);
    let mut state = AppState::new("Python", "Riley Chen\nPython, SQL\n");

    let outcome = session.optimize_resume(&mut state, &NoProgress).await.unwrap();
    let OptimizeOutcome::Optimized { artifact, .. } = outcome else {
        panic!("expected an optimized resume");
    };

    let path = artifact.write_to(dir.path()).await.unwrap();
    assert_eq!(path.file_name().unwrap(), "optimized_resume.pdf");
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(artifact.summary(Some(&path)).size_bytes, bytes.len());
}
