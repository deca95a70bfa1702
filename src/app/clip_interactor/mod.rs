// Clip interactor - Orchestrates one engine run per clip job

use std::sync::Arc;

use tracing::{error, info};

use crate::adapters::toml_config::DegenConfig;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::time::{format_elapsed, format_seconds};

/// Engine options that do not vary per clip
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub video_codec: String,
    pub preset: String,
    pub crf: u8,
    pub engine_log_level: String,
}

impl From<&DegenConfig> for EngineSettings {
    fn from(config: &DegenConfig) -> Self {
        Self {
            video_codec: config.video_codec.clone(),
            preset: config.preset.clone(),
            crf: config.crf,
            engine_log_level: config.engine_log_level.clone(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from(&DegenConfig::default())
    }
}

/// Build the engine argument vector for a job.
///
/// The seek goes before the input so the engine skips ahead without
/// decoding; `-t` caps the output at the clip length.
pub fn build_engine_args(job: &ClipJob, settings: &EngineSettings) -> Vec<String> {
    let mut args: Vec<String> = vec![
        "-hide_banner".into(),
        "-loglevel".into(),
        settings.engine_log_level.clone(),
        "-n".into(),
        "-ss".into(),
        format_seconds(job.start()),
        "-i".into(),
        job.source().display().to_string(),
    ];

    let flags = job.flags();
    if flags.skip_compression {
        args.extend(["-c", "copy", "-copyinkf"].map(String::from));
    } else {
        args.extend([
            "-c:v".to_string(),
            settings.video_codec.clone(),
            "-preset".to_string(),
            settings.preset.clone(),
            "-crf".to_string(),
            settings.crf.to_string(),
        ]);
    }

    if flags.strip_audio {
        args.push("-an".to_string());
    } else {
        args.extend(["-c:a", "copy"].map(String::from));
    }

    args.extend([
        "-t".to_string(),
        format_seconds(job.duration()),
        job.output_path().display().to_string(),
    ]);
    args
}

/// Interactor for running clip jobs through the engine
pub struct ClipInteractor {
    execute_port: Arc<dyn ExecutePort>,
    settings: EngineSettings,
}

impl ClipInteractor {
    /// Create new clip interactor with injected ports
    pub fn new(execute_port: Arc<dyn ExecutePort>, settings: EngineSettings) -> Self {
        Self {
            execute_port,
            settings,
        }
    }

    /// Engine arguments for `job`
    pub fn engine_args(&self, job: &ClipJob) -> Vec<String> {
        build_engine_args(job, &self.settings)
    }

    /// Run the engine for `job` and report its exit code.
    ///
    /// A non-zero exit is reported, not returned as an error; only a failure
    /// to run the engine at all is an error.
    pub async fn execute(&self, job: &ClipJob) -> Result<JobReport, DomainError> {
        info!(
            "Processing clip \"{}\" as \"{}\", start: {}s end: {}s duration: {}s",
            job.source().display(),
            job.output(),
            format_seconds(job.start()),
            format_seconds(job.end()),
            format_seconds(job.duration())
        );

        let args = self.engine_args(job);
        let outcome = self.execute_port.execute(&args).await?;

        match outcome.exit_code {
            Some(0) => info!(
                "Finished {} in {}",
                job.output(),
                format_elapsed(outcome.elapsed)
            ),
            Some(code) => error!(
                "Engine exited with code {} while writing {}",
                code,
                job.output()
            ),
            None => error!("Engine was terminated while writing {}", job.output()),
        }

        Ok(JobReport::new(job, outcome.exit_code, outcome.elapsed))
    }
}
