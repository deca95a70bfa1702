// Parameter interactor - Resolves clip name, start and end into a ClipJob

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::app::output_namer::OutputNamer;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

const NAME_QUESTION: &str = "Enter clip name (blank defaults \"output\"):";
const START_QUESTION: &str = "Enter start time (blank defaults to start of video):";
const END_QUESTION: &str = "Enter end time (blank defaults to end of video):";

/// Raw clip fields as given on the command line; `None` means not given
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawClipParams {
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Where a field's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    /// Given on the command line; failures are fatal
    CommandLine,
    /// Asked for interactively; failures ask again
    Prompt,
    /// Not given and not asked for; the field's default applies
    Default,
}

/// Interactor turning raw fields into a validated clip job
pub struct ParamInteractor {
    prompt_port: Arc<dyn PromptPort>,
    namer: Arc<OutputNamer>,
    interactive: bool,
    input_closed: AtomicBool,
}

impl ParamInteractor {
    /// Create new parameter interactor; `interactive` enables prompting
    /// for fields missing from the command line
    pub fn new(prompt_port: Arc<dyn PromptPort>, namer: Arc<OutputNamer>, interactive: bool) -> Self {
        Self {
            prompt_port,
            namer,
            interactive,
            input_closed: AtomicBool::new(false),
        }
    }

    /// Resolve every field of a clip of `source`, whose duration is
    /// `duration` seconds, and build the job.
    pub async fn resolve_job(
        &self,
        source: &Path,
        raw: RawClipParams,
        duration: f64,
        flags: ClipFlags,
        ext: &str,
    ) -> Result<ClipJob, DomainError> {
        let name = self.resolve_name(raw.name.as_deref(), ext).await?;
        let (mut start, start_origin) = self.resolve_start(raw.start.as_deref(), duration).await?;
        let (mut end, end_origin) = self.resolve_end(raw.end.as_deref(), duration).await?;

        while end <= start {
            let reason = format!(
                "end time {} must be after start time {} (clip would be empty)",
                end, start
            );
            if self.input_closed.load(Ordering::Relaxed) {
                return Err(DomainError::Validation(reason));
            }
            // No end in (start, duration] exists once start reaches the
            // end of the video, so only a new start can help
            if end_origin == FieldOrigin::Prompt && start < duration {
                self.report_error(&reason).await;
                end = self.resolve_end(None, duration).await?.0;
            } else if start_origin == FieldOrigin::Prompt {
                self.report_error(&reason).await;
                start = self.resolve_start(None, duration).await?.0;
            } else {
                return Err(DomainError::Validation(reason));
            }
        }

        info!(
            "Resolved clip {} from {}: start {}s, end {}s",
            name,
            source.display(),
            start,
            end
        );
        ClipJob::new(source, name, self.namer.output_dir(), start, end, flags)
    }

    /// Resolve the clip name; blank falls back to a free `output` name
    pub async fn resolve_name(&self, supplied: Option<&str>, ext: &str) -> Result<OutputName, DomainError> {
        let mut pending = supplied.map(str::to_string);
        let origin = self.origin_of(supplied);
        loop {
            let raw = self.answer(&mut pending, origin, NAME_QUESTION).await?;
            let outcome = self.name_outcome(raw.as_deref(), ext).await?;
            if let Some(name) = self.settle(outcome, origin).await? {
                self.namer.claim(&name);
                return Ok(name);
            }
        }
    }

    /// Resolve the start time against `duration`
    pub async fn resolve_start(
        &self,
        supplied: Option<&str>,
        duration: f64,
    ) -> Result<(f64, FieldOrigin), DomainError> {
        let mut pending = supplied.map(str::to_string);
        let origin = self.origin_of(supplied);
        loop {
            let raw = self.answer(&mut pending, origin, START_QUESTION).await?;
            if let Some(start) = self.settle(resolve_start(raw.as_deref(), duration), origin).await? {
                return Ok((start, origin));
            }
        }
    }

    /// Resolve the end time against `duration`
    pub async fn resolve_end(
        &self,
        supplied: Option<&str>,
        duration: f64,
    ) -> Result<(f64, FieldOrigin), DomainError> {
        let mut pending = supplied.map(str::to_string);
        let origin = self.origin_of(supplied);
        loop {
            let raw = self.answer(&mut pending, origin, END_QUESTION).await?;
            if let Some(end) = self.settle(resolve_end(raw.as_deref(), duration), origin).await? {
                return Ok((end, origin));
            }
        }
    }

    fn origin_of(&self, supplied: Option<&str>) -> FieldOrigin {
        match supplied {
            Some(_) => FieldOrigin::CommandLine,
            None if self.interactive => FieldOrigin::Prompt,
            None => FieldOrigin::Default,
        }
    }

    /// The next raw value: a pending command-line value first, then the
    /// console when prompting. Closed input reads as blank.
    async fn answer(
        &self,
        pending: &mut Option<String>,
        origin: FieldOrigin,
        question: &str,
    ) -> Result<Option<String>, DomainError> {
        if let Some(value) = pending.take() {
            return Ok(Some(value));
        }
        if origin != FieldOrigin::Prompt || self.input_closed.load(Ordering::Relaxed) {
            return Ok(None);
        }
        let answer = self.prompt_port.ask(question).await?;
        if answer.is_none() {
            self.input_closed.store(true, Ordering::Relaxed);
        }
        Ok(answer)
    }

    async fn name_outcome(&self, raw: Option<&str>, ext: &str) -> Result<FieldOutcome<OutputName>, DomainError> {
        let raw = raw.map(str::trim).unwrap_or("");
        if raw.is_empty() {
            let name = self.namer.peek(DEFAULT_OUTPUT_BASE, ext).await?;
            let warning = format!("no name entered, defaulting to \"{}\"", name.base);
            return Ok(FieldOutcome::SoftDefault(name, warning));
        }

        match validate_clip_name(raw) {
            FieldOutcome::Rejected(reason) => Ok(FieldOutcome::Rejected(reason)),
            FieldOutcome::Accepted(base) | FieldOutcome::SoftDefault(base, _) => {
                let name = OutputName::new(base, ext);
                if self.namer.is_taken(&name).await? {
                    Ok(FieldOutcome::Rejected(format!("\"{}\" already exists", name)))
                } else {
                    Ok(FieldOutcome::Accepted(name))
                }
            }
        }
    }

    /// Report an outcome. `Ok(None)` means ask again.
    async fn settle<T>(&self, outcome: FieldOutcome<T>, origin: FieldOrigin) -> Result<Option<T>, DomainError> {
        match outcome {
            FieldOutcome::Accepted(value) => Ok(Some(value)),
            FieldOutcome::SoftDefault(value, warning) => {
                warn!("{}", warning);
                self.prompt_port.say(&format!("warning: {}", warning)).await;
                Ok(Some(value))
            }
            FieldOutcome::Rejected(reason) => {
                let retry = origin == FieldOrigin::Prompt && !self.input_closed.load(Ordering::Relaxed);
                if !retry {
                    return Err(DomainError::Validation(reason));
                }
                self.report_error(&reason).await;
                Ok(None)
            }
        }
    }

    async fn report_error(&self, reason: &str) {
        warn!("Rejected input: {}", reason);
        self.prompt_port.say(&format!("error: {}", reason)).await;
    }
}
