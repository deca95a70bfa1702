//! Environment adapter
//!
//! Reads environment variables and locates executables on `PATH`.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::domain::errors::DomainError;

/// Environment adapter
pub struct EnvPathAdapter {
    path: Option<OsString>,
}

impl EnvPathAdapter {
    /// Adapter over the process environment
    pub fn new() -> Self {
        Self {
            path: std::env::var_os("PATH"),
        }
    }

    /// Adapter searching an explicit `PATH` value
    pub fn with_path(path: impl Into<OsString>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Get environment variable
    pub fn get_env(&self, key: &str) -> Result<Option<String>, DomainError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(DomainError::Usage(format!(
                "Failed to read environment variable {}: {}",
                key, e
            ))),
        }
    }

    /// First `PATH` entry holding an executable called `name`
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        which::which_in(name, self.path.as_ref(), cwd).ok()
    }
}

impl Default for EnvPathAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_binary(dir: &std::path::Path, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let binary = dir.join(name);
        std::fs::write(&binary, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(mode)).unwrap();
        binary
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_on_path() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let binary = write_binary(second.path(), "ffmpeg", 0o755);

        let path = std::env::join_paths([first.path(), second.path()]).unwrap();
        let env = EnvPathAdapter::with_path(path);

        assert_eq!(env.find_executable("ffmpeg"), Some(binary));
        assert_eq!(env.find_executable("ffprobe"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_find_executable_skips_non_executable_entries() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write_binary(first.path(), "ffmpeg", 0o644);
        let binary = write_binary(second.path(), "ffmpeg", 0o755);

        let path = std::env::join_paths([first.path(), second.path()]).unwrap();
        let env = EnvPathAdapter::with_path(path);

        assert_eq!(env.find_executable("ffmpeg"), Some(binary));
    }

    #[test]
    fn test_find_executable_without_path() {
        let env = EnvPathAdapter { path: None };
        assert_eq!(env.find_executable("ffmpeg"), None);
    }
}
