// Local filesystem adapter - Existence checks and directory listings

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter rooted at an output directory
pub struct LocalFsAdapter {
    working_dir: PathBuf,
}

impl LocalFsAdapter {
    /// Create new filesystem adapter writing outputs into `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        match tokio::fs::metadata(file_path).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::FsFail(format!(
                "Failed to check {}: {}",
                file_path.display(),
                e
            ))),
        }
    }

    async fn list_files(&self, dir_path: &Path) -> Result<Vec<String>, DomainError> {
        let dir = dir_path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            let mut names = Vec::new();
            for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
                let entry = entry.map_err(|e| {
                    DomainError::FsFail(format!("Failed to list {}: {}", dir.display(), e))
                })?;
                if entry.file_type().is_file() {
                    names.push(entry.file_name().to_string_lossy().into_owned());
                }
            }
            Ok(names)
        })
        .await
        .map_err(|e| DomainError::FsFail(format!("Directory listing task failed: {}", e)))?
    }

    fn working_dir(&self) -> PathBuf {
        self.working_dir.clone()
    }
}
