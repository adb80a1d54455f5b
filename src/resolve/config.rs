//! Resolver configuration.

use std::time::Duration;

/// Options recognized by the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Directory scoped (library-style) imports resolve against, relative to
    /// the loader's root
    pub module_root: String,
    /// Extension appended to canonical paths before fetching
    pub source_extension: String,
    /// Upper bound on a single fetch; `None` waits indefinitely
    pub fetch_timeout: Option<Duration>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            module_root: "modules".to_string(),
            source_extension: "rules".to_string(),
            fetch_timeout: None,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory scoped imports resolve against.
    pub fn with_module_root(mut self, root: impl Into<String>) -> Self {
        self.module_root = root.into();
        self
    }

    /// Set the source-file extension.
    pub fn with_source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = ext.into();
        self
    }

    /// Bound every fetch by `timeout`.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }
}
