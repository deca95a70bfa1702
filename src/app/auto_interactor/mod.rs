// Auto-mode interactor - Discovers clip jobs from encoded file names

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::app::output_namer::OutputNamer;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Jobs discovered in one directory scan
#[derive(Debug, Default)]
pub struct AutoScan {
    /// Files carrying the auto-mode prefix and a video extension
    pub candidates: usize,
    pub jobs: Vec<ClipJob>,
    pub skipped: Vec<SkippedEntry>,
}

enum EntryOutcome {
    Job(ClipJob),
    Skip(String),
}

/// Interactor scanning a directory for `degen-<start>-<end>-<name>` files
pub struct AutoModeInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    namer: Arc<OutputNamer>,
    video_extensions: Vec<String>,
    fallback_ext: String,
}

impl AutoModeInteractor {
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        namer: Arc<OutputNamer>,
        video_extensions: Vec<String>,
        fallback_ext: String,
    ) -> Self {
        Self {
            probe_port,
            fs_port,
            namer,
            video_extensions,
            fallback_ext,
        }
    }

    /// Scan `dir` once and build a job for every valid entry.
    ///
    /// Invalid entries are skipped with a reason; the scan carries on.
    /// Output names are claimed in discovery order, so later entries never
    /// reuse a name given to an earlier one.
    pub async fn scan(&self, dir: &Path, flags: ClipFlags) -> Result<AutoScan, DomainError> {
        let mut names = self.fs_port.list_files(dir).await?;
        names.sort();

        let mut scan = AutoScan::default();
        for file_name in names {
            if !is_recognized_video(Path::new(&file_name), &self.video_extensions)
                || !file_name.starts_with(AUTO_MODE_PREFIX)
            {
                continue;
            }
            scan.candidates += 1;

            match self.entry_job(dir, &file_name, flags).await? {
                EntryOutcome::Job(job) => {
                    info!(
                        "Auto mode: {} -> {} ({}s to {}s)",
                        file_name,
                        job.output(),
                        job.start(),
                        job.end()
                    );
                    scan.jobs.push(job);
                }
                EntryOutcome::Skip(reason) => {
                    warn!("Auto mode: skipping {}: {}", file_name, reason);
                    scan.skipped.push(SkippedEntry { file_name, reason });
                }
            }
        }

        debug!(
            "Auto mode scan of {}: {} candidates, {} jobs, {} skipped",
            dir.display(),
            scan.candidates,
            scan.jobs.len(),
            scan.skipped.len()
        );
        Ok(scan)
    }

    async fn entry_job(
        &self,
        dir: &Path,
        file_name: &str,
        flags: ClipFlags,
    ) -> Result<EntryOutcome, DomainError> {
        let (start, end, target) = match match_auto_mode_name(file_name) {
            AutoModeMatch::Matched { start, end, target } => (start, end, target),
            AutoModeMatch::NoMatch(reason) => return Ok(EntryOutcome::Skip(reason)),
        };

        let source = dir.join(file_name);
        let duration = match self.probe_port.probe_duration(&source).await {
            Ok(d) => d,
            Err(e) => return Ok(EntryOutcome::Skip(e.to_string())),
        };

        if start.as_seconds() > duration {
            return Ok(EntryOutcome::Skip(format!(
                "start time {}s is beyond video length ({:.2}s)",
                start.seconds, duration
            )));
        }
        if start > end {
            return Ok(EntryOutcome::Skip(format!(
                "start time {}s is after end time {}s",
                start.seconds, end.seconds
            )));
        }

        let mut end = end.as_seconds();
        if end > duration {
            warn!(
                "Auto mode: {} end time {}s is beyond video length, using end of video ({:.2}s)",
                file_name, end, duration
            );
            end = duration;
        }
        if end <= start.as_seconds() {
            return Ok(EntryOutcome::Skip(format!(
                "clip from {}s to {}s would be empty",
                start.seconds, end
            )));
        }

        let wanted = auto_output_name(&target, &self.fallback_ext);
        let name = self.namer.resolve(&wanted.base, &wanted.ext).await?;

        match ClipJob::new(source, name, self.namer.output_dir(), start.as_seconds(), end, flags) {
            Ok(job) => Ok(EntryOutcome::Job(job)),
            Err(e) => Ok(EntryOutcome::Skip(e.to_string())),
        }
    }
}
