//! FFprobe adapter for media file probing
//!
//! Runs the external prober and reads the `Duration: HH:MM:SS.hh` line out of
//! its text report.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

const DURATION_LABEL: &str = "Duration: ";

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    ffprobe: PathBuf,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter for the given prober binary
    pub fn new(ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe: ffprobe.into(),
        }
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        debug!("Probing {} with {}", file_path.display(), self.ffprobe.display());

        let output = Command::new(&self.ffprobe)
            .arg(file_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DomainError::ProbeFailure {
                path: file_path.display().to_string(),
                message: format!("failed to run {}: {}", self.ffprobe.display(), e),
            })?;

        // ffprobe writes its report to stderr
        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push_str(&String::from_utf8_lossy(&output.stderr));

        parse_probe_duration(&report).ok_or_else(|| DomainError::ProbeFailure {
            path: file_path.display().to_string(),
            message: "no duration line in probe output".to_string(),
        })
    }
}

/// Extract the duration in seconds from a probe report.
///
/// Reads the first line carrying `Duration: HH:MM:SS.hh`; the part after the
/// dot counts hundredths of a second.
pub fn parse_probe_duration(report: &str) -> Option<f64> {
    let line = report.lines().find(|l| l.contains(DURATION_LABEL))?;
    let field = line.split(DURATION_LABEL).nth(1)?.split(',').next()?.trim();
    let (clock, hundredths) = field.split_once('.').unwrap_or((field, "0"));

    let clock: Vec<&str> = clock.split(':').collect();
    if clock.len() != 3 {
        return None;
    }

    let mut total = 0.0;
    for (part, weight) in clock.iter().zip([3600.0, 60.0, 1.0]) {
        let value: u64 = part.trim().parse().ok()?;
        total += value as f64 * weight;
    }

    let fraction: u64 = hundredths.trim().parse().ok()?;
    Some(total + fraction as f64 * 0.01)
}
