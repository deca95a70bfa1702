// Output namer - Collision-free output file names

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Probes tried before giving up on a base name
pub const MAX_NAME_PROBES: u32 = 100_000;

/// Finds the lowest free `base`, `base1`, `base2`, ... in the working
/// directory, remembering names already handed out during this run.
pub struct OutputNamer {
    fs_port: Arc<dyn FsPort>,
    claimed: Mutex<HashSet<String>>,
}

impl OutputNamer {
    pub fn new(fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            fs_port,
            claimed: Mutex::new(HashSet::new()),
        }
    }

    /// Directory the names are resolved against
    pub fn output_dir(&self) -> PathBuf {
        self.fs_port.working_dir()
    }

    /// Whether `name` exists on disk or was claimed earlier in the run
    pub async fn is_taken(&self, name: &OutputName) -> Result<bool, DomainError> {
        let file_name = name.file_name();
        if self.claimed_contains(&file_name) {
            return Ok(true);
        }
        let path = self.fs_port.working_dir().join(&file_name);
        self.fs_port.file_exists(&path).await
    }

    /// Lowest free candidate for `base`, without claiming it
    pub async fn peek(&self, base: &str, ext: &str) -> Result<OutputName, DomainError> {
        for n in 0..MAX_NAME_PROBES {
            let candidate = OutputName::candidate(base, ext, n);
            if !self.is_taken(&candidate).await? {
                debug!("Output name {} is free after {} probes", candidate, n + 1);
                return Ok(candidate);
            }
        }
        Err(DomainError::NameExhausted {
            base: base.to_string(),
            ext: ext.to_string(),
            probes: MAX_NAME_PROBES,
        })
    }

    /// Lowest free candidate for `base`, reserved for the rest of the run
    pub async fn resolve(&self, base: &str, ext: &str) -> Result<OutputName, DomainError> {
        let name = self.peek(base, ext).await?;
        self.claim(&name);
        Ok(name)
    }

    /// Reserve a name chosen elsewhere
    pub fn claim(&self, name: &OutputName) {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.file_name());
    }

    fn claimed_contains(&self, file_name: &str) -> bool {
        self.claimed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockFsAdapter;
    use async_trait::async_trait;
    use std::path::Path;

    /// Filesystem on which every name is already taken
    struct FullFs;

    #[async_trait]
    impl FsPort for FullFs {
        async fn file_exists(&self, _file_path: &Path) -> Result<bool, DomainError> {
            Ok(true)
        }

        async fn list_files(&self, _dir_path: &Path) -> Result<Vec<String>, DomainError> {
            Ok(Vec::new())
        }

        fn working_dir(&self) -> PathBuf {
            PathBuf::from("/full")
        }
    }

    fn namer(files: &[&str]) -> (Arc<MockFsAdapter>, OutputNamer) {
        let fs = Arc::new(MockFsAdapter::new("/work").with_files(files));
        let namer = OutputNamer::new(Arc::clone(&fs) as Arc<dyn FsPort>);
        (fs, namer)
    }

    #[tokio::test]
    async fn test_free_base_name_is_used_as_is() {
        let (_, namer) = namer(&[]);
        assert_eq!(namer.peek("output", "mp4").await.unwrap().base, "output");
    }

    #[tokio::test]
    async fn test_lowest_free_suffix() {
        let (_, namer) = namer(&["output.mp4", "output1.mp4"]);
        assert_eq!(namer.peek("output", "mp4").await.unwrap().base, "output2");
    }

    #[tokio::test]
    async fn test_other_extensions_do_not_collide() {
        let (_, namer) = namer(&["output.avi"]);
        assert_eq!(namer.peek("output", "mp4").await.unwrap().base, "output");
    }

    #[tokio::test]
    async fn test_peek_is_idempotent_until_file_appears() {
        let (fs, namer) = namer(&["clip.mp4"]);
        let first = namer.peek("clip", "mp4").await.unwrap();
        let second = namer.peek("clip", "mp4").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.base, "clip1");

        fs.add_file(first.file_name());
        assert_eq!(namer.peek("clip", "mp4").await.unwrap().base, "clip2");
    }

    #[tokio::test]
    async fn test_resolve_never_reuses_claimed_name() {
        let (_, namer) = namer(&[]);
        let first = namer.resolve("clip_auto", "mp4").await.unwrap();
        let second = namer.resolve("clip_auto", "mp4").await.unwrap();
        let third = namer.resolve("clip_auto", "mp4").await.unwrap();
        assert_eq!(first.base, "clip_auto");
        assert_eq!(second.base, "clip_auto1");
        assert_eq!(third.base, "clip_auto2");
    }

    #[tokio::test]
    async fn test_claimed_name_is_taken() {
        let (_, namer) = namer(&[]);
        let name = OutputName::new("mine", "mp4");
        assert!(!namer.is_taken(&name).await.unwrap());
        namer.claim(&name);
        assert!(namer.is_taken(&name).await.unwrap());
    }

    #[tokio::test]
    async fn test_gives_up_after_probe_limit() {
        let namer = OutputNamer::new(Arc::new(FullFs));
        let err = namer.peek("output", "mp4").await.unwrap_err();
        assert_eq!(
            err,
            DomainError::NameExhausted {
                base: "output".to_string(),
                ext: "mp4".to_string(),
                probes: MAX_NAME_PROBES,
            }
        );
        assert!(namer.resolve("output", "mp4").await.is_err());
    }

    #[tokio::test]
    async fn test_claims_survive_poisoned_lock() {
        let (_, namer) = namer(&[]);
        let earlier = OutputName::new("earlier", "mp4");
        namer.claim(&earlier);

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = namer.claimed.lock().unwrap();
            panic!("poison the claimed set");
        }));
        assert!(poisoned.is_err());
        assert!(namer.claimed.is_poisoned());

        let later = OutputName::new("later", "mp4");
        namer.claim(&later);
        assert!(namer.is_taken(&earlier).await.unwrap());
        assert!(namer.is_taken(&later).await.unwrap());
        assert_eq!(namer.resolve("later", "mp4").await.unwrap().base, "later1");
    }
}
