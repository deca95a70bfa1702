// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::errors::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Total duration of a media file, in seconds
    async fn probe_duration(&self, file_path: &Path) -> Result<f64, DomainError>;
}

/// Port for running the external transcoding engine
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Run the engine with `args` and wait for it to exit
    async fn execute(&self, args: &[String]) -> Result<ExecutionOutcome, DomainError>;
}

/// What the engine process reported
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionOutcome {
    /// Exit code, `None` if the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Wall-clock time from spawn to exit
    pub elapsed: Duration,
}

impl ExecutionOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Names of the regular files directly inside a directory
    async fn list_files(&self, dir_path: &Path) -> Result<Vec<String>, DomainError>;

    /// Directory outputs are written to
    fn working_dir(&self) -> PathBuf;
}

/// Port for interactive console input
#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Show `question` and read one answer; `None` once input is exhausted
    async fn ask(&self, question: &str) -> Result<Option<String>, DomainError>;

    /// Show a message to the user
    async fn say(&self, message: &str);
}
