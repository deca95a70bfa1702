//! Command implementations

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, warn};

use crate::adapters::tracing_log::init_logging;
use crate::adapters::{DegenConfig, EnvPathAdapter};
use crate::app::container::{AppContainer, DefaultAppContainer};
use crate::app::param_interactor::RawClipParams;
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration;
use crate::domain::errors::DomainError;
use crate::domain::model::{ClipFlags, ClipJob, JobReport, SkippedEntry};
use crate::domain::rules::is_recognized_video;
use crate::error::{DegenError, DegenResult};
use crate::utils::time::{format_elapsed, format_seconds};

pub const BANNER: &str = r"
   ___ _    ___ ___     ___  ___ ___ ___ _  _ ___ ___    _ _____ ___  ___
  / __| |  |_ _| _ \   |   \| __/ __| __| \| | __| _ \  /_\_   _/ _ \| _ \
 | (__| |__ | ||  _/   | |) | _| (_ | _|| .` | _||   / / _ \| || (_) |   /
  \___|____|___|_|     |___/|___\___|___|_|\_|___|_|_\/_/ \_\_| \___/|_|_\

                            CLIP DEGENERATOR
";

pub fn print_banner() {
    println!("{}", BANNER);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Single,
    Auto,
}

/// Outcome of one invocation
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub mode: RunMode,
    pub dry_run: bool,
    /// Sources considered: 1 in single mode, auto-mode candidates otherwise
    pub discovered: usize,
    pub reports: Vec<JobReport>,
    pub skipped: Vec<SkippedEntry>,
}

impl RunSummary {
    fn new(mode: RunMode, dry_run: bool) -> Self {
        Self {
            mode,
            dry_run,
            discovered: 0,
            reports: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }
}

/// Execute one invocation of the tool
pub async fn run(cli: Cli) -> DegenResult<()> {
    let runtime = initialize_configuration(&cli, &EnvPathAdapter::new())?;
    init_logging(&runtime.config.log_level, runtime.config.log_format)?;
    info!(
        "Using engine {} and prober {}",
        runtime.engine_paths.ffmpeg.display(),
        runtime.engine_paths.ffprobe.display()
    );

    let interactive = !cli.yes && !cli.auto;
    if interactive && !cli.json {
        print_banner();
    }

    let working_dir = std::env::current_dir()?;
    let container = DefaultAppContainer::new(
        &runtime.config,
        &runtime.engine_paths,
        working_dir,
        interactive,
    );

    let summary = execute(&container, &cli, &runtime.config).await?;
    print_summary(&summary, cli.json)?;

    match summary.failed() {
        0 => Ok(()),
        failed => Err(DegenError::BatchFailed {
            failed,
            total: summary.reports.len(),
        }),
    }
}

/// Dispatch to single or auto mode against `container`
pub async fn execute(
    container: &dyn AppContainer,
    cli: &Cli,
    config: &DegenConfig,
) -> DegenResult<RunSummary> {
    if cli.auto {
        run_auto(container, cli).await
    } else {
        run_single(container, cli, config).await
    }
}

fn clip_flags(cli: &Cli) -> ClipFlags {
    ClipFlags {
        strip_audio: cli.no_audio,
        skip_compression: cli.no_compress,
    }
}

async fn run_single(
    container: &dyn AppContainer,
    cli: &Cli,
    config: &DegenConfig,
) -> DegenResult<RunSummary> {
    let file = cli
        .file
        .clone()
        .ok_or_else(|| DomainError::Usage("no video file given".to_string()))?;

    if !is_recognized_video(&file, &config.video_extensions) {
        return Err(DomainError::Usage(format!(
            "{} is not a recognized video file (expected one of: {})",
            file.display(),
            config.video_extensions.join(", ")
        ))
        .into());
    }
    if !container.fs_port().file_exists(&file).await? {
        return Err(DomainError::Usage(format!("input file {} does not exist", file.display())).into());
    }

    let duration = container.probe_port().probe_duration(&file).await?;
    info!("{} is {:.2}s long", file.display(), duration);

    let raw = RawClipParams {
        name: cli.name.clone(),
        start: cli.start.clone(),
        end: cli.end.clone(),
    };
    let job = container
        .param_interactor()
        .resolve_job(&file, raw, duration, clip_flags(cli), &config.output_ext)
        .await?;

    let mut summary = RunSummary::new(RunMode::Single, cli.dry_run);
    summary.discovered = 1;
    summary.reports.push(run_job(container, &job, cli).await?);
    Ok(summary)
}

async fn run_auto(container: &dyn AppContainer, cli: &Cli) -> DegenResult<RunSummary> {
    if cli.file.is_some() || cli.start.is_some() || cli.end.is_some() {
        warn!("Positional FILE/START/END arguments are ignored in auto mode");
    }
    if cli.name.is_some() {
        warn!("--name is ignored in auto mode");
    }

    let dir: PathBuf = cli
        .dir
        .clone()
        .unwrap_or_else(|| container.fs_port().working_dir());
    let scan = container
        .auto_interactor()
        .scan(&dir, clip_flags(cli))
        .await?;

    let mut summary = RunSummary::new(RunMode::Auto, cli.dry_run);
    summary.discovered = scan.candidates;
    summary.skipped = scan.skipped;

    if scan.candidates == 0 && !cli.json {
        println!(
            "no degen-<start>-<end>-<name> videos found in {}",
            dir.display()
        );
    }

    for job in &scan.jobs {
        let report = match run_job(container, job, cli).await {
            Ok(report) => report,
            Err(DegenError::Domain(DomainError::EngineFailure(message))) => {
                error!("{}: {}", job.output(), message);
                JobReport::new(job, None, Duration::ZERO)
            }
            Err(e) => return Err(e),
        };
        summary.reports.push(report);
    }
    Ok(summary)
}

async fn run_job(container: &dyn AppContainer, job: &ClipJob, cli: &Cli) -> DegenResult<JobReport> {
    let clipper = container.clip_interactor();
    if !cli.json {
        println!(
            "processing clip \"{}\" as \"{}\", start: {} end: {} duration: {}",
            job.source().display(),
            job.output(),
            format_seconds(job.start()),
            format_seconds(job.end()),
            format_seconds(job.duration())
        );
    }

    if cli.dry_run {
        if !cli.json {
            let args: Vec<String> = clipper.engine_args(job).iter().map(|a| quote_arg(a)).collect();
            println!("ffmpeg {}", args.join(" "));
        }
        return Ok(JobReport::dry_run(job));
    }

    let report = clipper.execute(job).await?;
    if !cli.json {
        println!("{}", describe_report(&report));
    }
    Ok(report)
}

fn describe_report(report: &JobReport) -> String {
    let elapsed = format_elapsed(Duration::from_millis(report.elapsed_ms as u64));
    match report.exit_code {
        Some(code) => format!(
            "finished processing \"{}\" with exit code {} in {}",
            report.output, code, elapsed
        ),
        None => format!("engine did not finish \"{}\"", report.output),
    }
}

fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) || arg.contains('"') {
        format!("\"{}\"", arg.replace('"', "\\\""))
    } else {
        arg.to_string()
    }
}

fn print_summary(summary: &RunSummary, json: bool) -> DegenResult<()> {
    if json {
        let text = serde_json::to_string_pretty(summary).map_err(std::io::Error::from)?;
        println!("{}", text);
        return Ok(());
    }

    if summary.mode == RunMode::Auto {
        for entry in &summary.skipped {
            println!("skipped \"{}\": {}", entry.file_name, entry.reason);
        }
        println!(
            "auto mode: {} discovered, {} skipped, {} run, {} succeeded, {} failed",
            summary.discovered,
            summary.skipped.len(),
            summary.reports.len(),
            summary.succeeded(),
            summary.failed()
        );
    }
    Ok(())
}
