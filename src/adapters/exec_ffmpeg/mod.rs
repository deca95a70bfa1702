//! FFmpeg execution adapter
//!
//! Spawns the external engine once per clip and waits for it to exit.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    ffmpeg: PathBuf,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter for the given engine binary
    pub fn new(ffmpeg: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
        }
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn execute(&self, args: &[String]) -> Result<ExecutionOutcome, DomainError> {
        debug!("Running {} {}", self.ffmpeg.display(), args.join(" "));

        let started = Instant::now();
        let status = Command::new(&self.ffmpeg)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                DomainError::EngineFailure(format!(
                    "failed to run {}: {}",
                    self.ffmpeg.display(),
                    e
                ))
            })?;

        Ok(ExecutionOutcome {
            exit_code: status.code(),
            elapsed: started.elapsed(),
        })
    }
}
