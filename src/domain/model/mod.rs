// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::domain::errors::DomainError;

/// A parsed time expression, in whole seconds.
///
/// Accepted spellings are bare seconds (`"90"`), `"M:SS"` (`"1:30"`) and
/// `"NmSS"` with an optional trailing `s` (`"1m30"`, `"1m30s"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSpec {
    pub seconds: u64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Create a new TimeSpec from minutes and seconds
    pub fn from_components(minutes: u64, seconds: u64) -> Self {
        Self {
            seconds: minutes * 60 + seconds,
        }
    }

    /// Seconds as a floating point value, for comparison with probed durations
    pub fn as_seconds(&self) -> f64 {
        self.seconds as f64
    }

    /// Parse a time expression.
    ///
    /// A single trailing `s` is stripped (case-insensitive), then the text is
    /// split on `m` or `:`. One all-digit token is seconds; two all-digit
    /// tokens are minutes and seconds. Anything else is rejected.
    pub fn parse(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("no time given".to_string()));
        }

        let lowered = trimmed.to_ascii_lowercase();
        let body = lowered.strip_suffix('s').unwrap_or(&lowered);
        let tokens: Vec<&str> = body.split(|c: char| c == 'm' || c == ':').collect();

        let unparseable =
            || DomainError::Validation(format!("unrecognized time \"{}\"", trimmed));

        match tokens.as_slice() {
            [secs] => Ok(Self::from_seconds(parse_digits(secs).ok_or_else(unparseable)?)),
            [mins, secs] => {
                let minutes = parse_digits(mins).ok_or_else(unparseable)?;
                let seconds = parse_digits(secs).ok_or_else(unparseable)?;
                minutes
                    .checked_mul(60)
                    .and_then(|m| m.checked_add(seconds))
                    .map(Self::from_seconds)
                    .ok_or_else(unparseable)
            }
            _ => Err(unparseable()),
        }
    }

    /// Parse the colon-free spellings usable inside a filename: bare digits
    /// or `NmSS` / `NmSSs` with exactly two second digits.
    pub fn parse_compact(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();
        let digits_only = !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit());
        if digits_only || is_minute_second_form(trimmed) {
            return Self::parse(trimmed);
        }
        Err(DomainError::Validation(format!(
            "\"{}\" is not a filename time (expected seconds or NmSS)",
            trimmed
        )))
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

fn parse_digits(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Matches `^\d+m\d{2}s?$`
fn is_minute_second_form(text: &str) -> bool {
    let body = text.strip_suffix('s').unwrap_or(text);
    match body.split_once('m') {
        Some((mins, secs)) => {
            !mins.is_empty()
                && mins.bytes().all(|b| b.is_ascii_digit())
                && secs.len() == 2
                && secs.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Result of validating one user-supplied field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome<T> {
    /// The value is valid as given
    Accepted(T),
    /// The value was missing or out of range and replaced by a default
    SoftDefault(T, String),
    /// The value is invalid; the caller must ask again or give up
    Rejected(String),
}

impl<T> FieldOutcome<T> {
    /// Whether the field needs to be supplied again
    pub fn is_rejected(&self) -> bool {
        matches!(self, FieldOutcome::Rejected(_))
    }

    /// The resolved value, if any
    pub fn value(self) -> Option<T> {
        match self {
            FieldOutcome::Accepted(v) | FieldOutcome::SoftDefault(v, _) => Some(v),
            FieldOutcome::Rejected(_) => None,
        }
    }
}

/// Output file name, as a base name plus extension
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OutputName {
    pub base: String,
    pub ext: String,
}

impl OutputName {
    pub fn new(base: impl Into<String>, ext: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ext: ext.into(),
        }
    }

    /// Candidate number `n` for a base name: `base`, `base1`, `base2`, ...
    pub fn candidate(base: &str, ext: &str, n: u32) -> Self {
        if n == 0 {
            Self::new(base, ext)
        } else {
            Self::new(format!("{}{}", base, n), ext)
        }
    }

    /// File name with extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.base, self.ext)
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Flags applying to every clip of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClipFlags {
    pub strip_audio: bool,
    pub skip_compression: bool,
}

/// A fully resolved, runnable clip.
///
/// Only constructible through [`ClipJob::new`], which guarantees
/// `0 <= start < end`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipJob {
    source: PathBuf,
    output: OutputName,
    output_dir: PathBuf,
    start: f64,
    end: f64,
    flags: ClipFlags,
}

impl ClipJob {
    /// Create new clip job with validation
    pub fn new(
        source: impl Into<PathBuf>,
        output: OutputName,
        output_dir: impl Into<PathBuf>,
        start: f64,
        end: f64,
        flags: ClipFlags,
    ) -> Result<Self, DomainError> {
        if !start.is_finite() || !end.is_finite() || start < 0.0 {
            return Err(DomainError::Validation(format!(
                "start time {} is not a valid position",
                start
            )));
        }
        if end <= start {
            return Err(DomainError::Validation(format!(
                "end time {} must be after start time {}",
                end, start
            )));
        }

        Ok(Self {
            source: source.into(),
            output,
            output_dir: output_dir.into(),
            start,
            end,
            flags,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output(&self) -> &OutputName {
        &self.output
    }

    /// Full path of the file the engine writes
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.output.file_name())
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn flags(&self) -> ClipFlags {
        self.flags
    }

    /// Clip length in seconds, always positive
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Outcome of matching a filename against the auto-mode grammar
#[derive(Debug, Clone, PartialEq)]
pub enum AutoModeMatch {
    /// `degen-<START>-<END>-<TARGET>` with both times parsed
    Matched {
        start: TimeSpec,
        end: TimeSpec,
        target: String,
    },
    /// Not an auto-mode filename, or a malformed one
    NoMatch(String),
}

/// Report for one executed (or dry-run) clip
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub source: String,
    pub output: String,
    pub start: f64,
    pub end: f64,
    pub duration: f64,
    pub exit_code: Option<i32>,
    pub elapsed_ms: u128,
    pub success: bool,
}

impl JobReport {
    pub fn new(job: &ClipJob, exit_code: Option<i32>, elapsed: Duration) -> Self {
        Self {
            source: job.source().display().to_string(),
            output: job.output().file_name(),
            start: job.start(),
            end: job.end(),
            duration: job.duration(),
            exit_code,
            elapsed_ms: elapsed.as_millis(),
            success: exit_code == Some(0),
        }
    }

    /// Report for a job that was resolved but not handed to the engine
    pub fn dry_run(job: &ClipJob) -> Self {
        Self {
            success: true,
            ..Self::new(job, None, Duration::ZERO)
        }
    }
}

/// An auto-mode entry that was not turned into a job
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub file_name: String,
    pub reason: String,
}

#[cfg(test)]
mod tests;
