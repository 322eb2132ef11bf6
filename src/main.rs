//! Resume optimizer: keyword matching of resumes against job descriptions

use clap::Parser;
use log::{error, info, warn};
use resume_optimizer::cli::{parse_download_format, parse_output_format, Cli, Commands, ConfigAction, SampleKind};
use resume_optimizer::config::{Config, DownloadFormat, OutputFormat};
use resume_optimizer::error::{Result, ResumeOptimizerError};
use resume_optimizer::input::{InputManager, InputSource};
use resume_optimizer::output::formatter::{save_report_to_file, ReportGenerator};
use resume_optimizer::output::report::OptimizationReport;
use resume_optimizer::processing::analyzer::AnalysisEngine;
use resume_optimizer::progress::{BarProgress, NoProgress, ProgressReporter};
use resume_optimizer::samples::{SAMPLE_JOB_DESCRIPTION, SAMPLE_RESUME};
use resume_optimizer::session::{AppState, OptimizeOutcome, Session};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    if let Err(e) = run_command(cli).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    match cli.command {
        Commands::AnalyzeJob { job, job_text } => {
            let config = load_config(&config_path)?;
            let options = RenderOptions::resolve(&cli.output, cli.no_color, cli.save, &config)?;

            let mut inputs = InputManager::new();
            let source = InputSource::from_args(job, job_text);
            let job_description = match &source {
                Some(source) => inputs.read(source).await?,
                None => {
                    info!("No job description given, using the built-in sample");
                    SAMPLE_JOB_DESCRIPTION.to_string()
                }
            };

            let session = build_session(&config, config.output.download_format)?;
            let reporter = progress_reporter(&config, options.format);
            let mut state = AppState::new(job_description, "");

            let job_report = session.analyze_job(&mut state, reporter.as_ref()).await;

            let mut report = OptimizationReport::new(session.engine().vocabulary().len())
                .with_sources(Some(describe(&source, "<sample>")), None);
            report.job_analysis = Some(job_report);

            emit_report(&report, &options)?;
        }

        Commands::Optimize {
            job,
            job_text,
            resume,
            resume_text,
            download,
            download_format,
        } => {
            let config = load_config(&config_path)?;
            let options = RenderOptions::resolve(&cli.output, cli.no_color, cli.save, &config)?;
            let download_format = match download_format {
                Some(f) => parse_download_format(&f).map_err(ResumeOptimizerError::InvalidInput)?,
                None => config.output.download_format,
            };

            let mut inputs = InputManager::new();
            let job_source = InputSource::from_args(job, job_text);
            let resume_source = InputSource::from_args(resume, resume_text);

            let job_description = match &job_source {
                Some(source) => inputs.read(source).await?,
                None => String::new(),
            };
            let resume_text = match &resume_source {
                Some(source) => inputs.read(source).await?,
                None => {
                    info!("No resume given, using the built-in sample");
                    SAMPLE_RESUME.to_string()
                }
            };

            let session = build_session(&config, download_format)?;
            let reporter = progress_reporter(&config, options.format);
            let mut state = AppState::new(job_description, resume_text);

            let mut report = OptimizationReport::new(session.engine().vocabulary().len())
                .with_sources(
                    job_source.as_ref().map(InputSource::describe),
                    Some(describe(&resume_source, "<sample>")),
                );

            if state.has_job_description() {
                report.job_analysis = Some(session.analyze_job(&mut state, reporter.as_ref()).await);
            }

            match session.optimize_resume(&mut state, reporter.as_ref()).await? {
                OptimizeOutcome::Optimized { report: resume_report, artifact } => {
                    report.resume_analysis = Some(resume_report);
                    let saved_to = match &download {
                        Some(target) => {
                            let path = artifact.write_to(target).await?;
                            info!("Optimized resume written to {}", path.display());
                            Some(path)
                        }
                        None => None,
                    };
                    report.download = Some(artifact.summary(saved_to.as_deref()));
                }
                OptimizeOutcome::MissingJobDescription { warning } => {
                    warn!("{}", warning);
                    report.warning = Some(warning);
                }
            }

            emit_report(&report, &options)?;
        }

        Commands::Sample { kind } => {
            let text = match kind {
                SampleKind::Resume => SAMPLE_RESUME,
                SampleKind::Job => SAMPLE_JOB_DESCRIPTION,
            };
            println!("{}", text.trim_end());
        }

        // Reset and path never parse the existing file.
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let config = load_config(&config_path)?;
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeOptimizerError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
            }

            ConfigAction::Reset => {
                println!("🔄 Resetting configuration to defaults...");
                Config::reset(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            ConfigAction::Path => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

/// How a report is rendered and where it goes.
struct RenderOptions {
    format: OutputFormat,
    use_colors: bool,
    save: Option<PathBuf>,
}

impl RenderOptions {
    fn resolve(output: &Option<String>, no_color: bool, save: Option<PathBuf>, config: &Config) -> Result<Self> {
        let format = match output {
            Some(format) => parse_output_format(format).map_err(ResumeOptimizerError::InvalidInput)?,
            None => config.output.format,
        };
        Ok(Self {
            format,
            use_colors: config.output.color_output && !no_color,
            save,
        })
    }
}

fn load_config(config_path: &Path) -> Result<Config> {
    Config::load(Some(config_path)).map_err(|e| {
        error!("Failed to load configuration from {}", config_path.display());
        e
    })
}

fn build_session(config: &Config, download_format: DownloadFormat) -> Result<Session> {
    let engine = AnalysisEngine::from_config(config)?;
    Ok(Session::new(engine, config.progress.clone(), download_format))
}

/// Progress bars only accompany console output.
fn progress_reporter(config: &Config, format: OutputFormat) -> Box<dyn ProgressReporter> {
    if config.progress.enabled && format == OutputFormat::Console {
        Box::new(BarProgress::new())
    } else {
        Box::new(NoProgress)
    }
}

fn describe(source: &Option<InputSource>, fallback: &str) -> String {
    source
        .as_ref()
        .map(InputSource::describe)
        .unwrap_or_else(|| fallback.to_string())
}

fn emit_report(report: &OptimizationReport, options: &RenderOptions) -> Result<()> {
    let generator = ReportGenerator::with_options(options.use_colors && options.save.is_none());
    let rendered = generator.generate_report(report, &options.format)?;

    match &options.save {
        Some(path) => {
            save_report_to_file(&rendered, path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
