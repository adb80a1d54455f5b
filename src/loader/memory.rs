//! In-memory source loader.

use std::time::Duration;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::{LoadError, SourceLoader};

/// Serves module source from a fixed path→text map.
///
/// Used for embedded rule libraries and as the test harness loader: each path
/// may carry an artificial fetch delay, which is how tests pin an otherwise
/// nondeterministic merge completion order, and every fetch is recorded so
/// tests can assert a module was loaded exactly once.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    files: FxHashMap<SmolStr, String>,
    delays: FxHashMap<SmolStr, Duration>,
    fetch_log: Mutex<Vec<SmolStr>>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file. `path` must include the extension the engine will
    /// request (e.g. `proj/base.rules`).
    pub fn with_file(mut self, path: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        self.files.insert(path.into(), text.into());
        self
    }

    /// Delay fetches of `path` by `delay` before they settle.
    pub fn with_delay(mut self, path: impl Into<SmolStr>, delay: Duration) -> Self {
        self.delays.insert(path.into(), delay);
        self
    }

    /// Paths fetched so far, in request order.
    pub fn fetched(&self) -> Vec<SmolStr> {
        self.fetch_log.lock().clone()
    }

    /// Number of times `path` has been fetched.
    pub fn fetch_count(&self, path: &str) -> usize {
        self.fetch_log.lock().iter().filter(|p| *p == path).count()
    }
}

impl SourceLoader for MemoryLoader {
    async fn load(&self, path: &str) -> Result<String, LoadError> {
        self.fetch_log.lock().push(SmolStr::new(path));

        if let Some(delay) = self.delays.get(path) {
            tokio::time::sleep(*delay).await;
        }

        match self.files.get(path) {
            Some(text) => Ok(text.clone()),
            None => Err(LoadError::not_found(path)),
        }
    }
}
