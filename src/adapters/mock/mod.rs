//! In-memory adapters
//!
//! Stand-ins for the prober, engine, filesystem and console, used to drive
//! the interactors without external processes.

use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Probe adapter answering from a table of file name to duration
#[derive(Default)]
pub struct MockProbeAdapter {
    durations: HashMap<String, f64>,
}

impl MockProbeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `seconds` for any path whose file name is `file_name`
    pub fn with_duration(mut self, file_name: &str, seconds: f64) -> Self {
        self.durations.insert(file_name.to_string(), seconds);
        self
    }
}

#[async_trait]
impl ProbePort for MockProbeAdapter {
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError> {
        let name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.durations
            .get(&name)
            .copied()
            .ok_or_else(|| DomainError::ProbeFailure {
                path: file_path.display().to_string(),
                message: "no duration line in probe output".to_string(),
            })
    }
}

/// Execution adapter recording every argument vector it receives
pub struct MockExecutionAdapter {
    exit_codes: Mutex<VecDeque<i32>>,
    calls: Mutex<Vec<Vec<String>>>,
    fs: Option<Arc<MockFsAdapter>>,
}

impl MockExecutionAdapter {
    /// Engine that always exits 0
    pub fn new() -> Self {
        Self {
            exit_codes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            fs: None,
        }
    }

    /// Exit codes to return, in order; 0 once exhausted
    pub fn with_exit_codes(self, codes: &[i32]) -> Self {
        *self.exit_codes.lock().unwrap() = codes.iter().copied().collect();
        self
    }

    /// Create the output file (last argument) on `fs` for every successful run
    pub fn writing_to(mut self, fs: Arc<MockFsAdapter>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Argument vectors received so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockExecutionAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExecutePort for MockExecutionAdapter {
    async fn execute(&self, args: &[String]) -> Result<ExecutionOutcome, DomainError> {
        self.calls.lock().unwrap().push(args.to_vec());
        let code = self.exit_codes.lock().unwrap().pop_front().unwrap_or(0);
        if code == 0 {
            if let (Some(fs), Some(output)) = (&self.fs, args.last()) {
                fs.add_file(output);
            }
        }
        Ok(ExecutionOutcome {
            exit_code: Some(code),
            elapsed: Duration::from_millis(10),
        })
    }
}

/// Filesystem adapter backed by a set of paths
pub struct MockFsAdapter {
    working_dir: PathBuf,
    files: Mutex<HashSet<PathBuf>>,
}

impl MockFsAdapter {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            files: Mutex::new(HashSet::new()),
        }
    }

    /// Add a file; relative paths land in the working directory
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = self.working_dir.join(path);
        self.files.lock().unwrap().insert(path);
    }

    pub fn with_files(self, names: &[&str]) -> Self {
        for name in names {
            self.add_file(name);
        }
        self
    }
}

#[async_trait]
impl FsPort for MockFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        let path = self.working_dir.join(file_path);
        Ok(self.files.lock().unwrap().contains(&path))
    }

    async fn list_files(&self, dir_path: &Path) -> Result<Vec<String>, DomainError> {
        let dir = self.working_dir.join(dir_path);
        let files = self.files.lock().unwrap();
        Ok(files
            .iter()
            .filter(|p| p.parent() == Some(dir.as_path()))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect())
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir.clone()
    }
}

/// Prompt adapter replaying scripted answers
pub struct ScriptedPromptAdapter {
    answers: Mutex<VecDeque<String>>,
    transcript: Mutex<Vec<String>>,
}

impl ScriptedPromptAdapter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| a.to_string()).collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Questions asked and messages shown, in order
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().unwrap().clone()
    }

    /// Number of questions asked so far
    pub fn questions_asked(&self) -> usize {
        self.transcript
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.starts_with("? "))
            .count()
    }
}

#[async_trait]
impl PromptPort for ScriptedPromptAdapter {
    async fn ask(&self, question: &str) -> Result<Option<String>, DomainError> {
        self.transcript.lock().unwrap().push(format!("? {}", question));
        Ok(self.answers.lock().unwrap().pop_front())
    }

    async fn say(&self, message: &str) {
        self.transcript.lock().unwrap().push(message.to_string());
    }
}
