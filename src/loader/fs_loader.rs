//! Filesystem-backed source loader.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::{LoadError, SourceLoader};

/// Loads module source from a directory tree.
///
/// Canonical paths are resolved relative to `root`; the engine has already
/// appended the configured extension by the time a path reaches the loader.
#[derive(Debug, Clone)]
pub struct FsSourceLoader {
    root: PathBuf,
}

impl FsSourceLoader {
    /// Create a loader rooted at `root`. By convention this is the process's
    /// working directory in CLI use.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl SourceLoader for FsSourceLoader {
    async fn load(&self, path: &str) -> Result<String, LoadError> {
        let file = self.root.join(path);
        tracing::trace!(file = %file.display(), "reading module source");

        match tokio::fs::read_to_string(&file).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(LoadError::not_found(path)),
            Err(err) => Err(LoadError::Io {
                path: path.into(),
                source: err,
            }),
        }
    }
}
