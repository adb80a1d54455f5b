//! Source loading boundary.
//!
//! The engine identifies modules by canonical, extension-less paths; when it
//! needs a module's text it asks a [`SourceLoader`] for the canonical path
//! with the configured extension appended (e.g. `proj/rules/base.rules`).
//! Loading is the engine's only suspension point, so the trait is async.
//!
//! Two loaders ship with the crate: [`FsSourceLoader`] reads from a directory
//! tree, [`MemoryLoader`] serves a fixed path→text map (fixtures, embedded
//! rule libraries, and tests that need controllable fetch latency).

mod fs_loader;
mod memory;

pub use fs_loader::FsSourceLoader;
pub use memory::MemoryLoader;

use std::future::Future;

use smol_str::SmolStr;
use thiserror::Error;

/// A source fetch failed.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No content exists at the requested path.
    #[error("module source not found: {path}")]
    NotFound { path: SmolStr },

    /// The path exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: SmolStr,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn not_found(path: impl Into<SmolStr>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Async source-fetch collaborator.
///
/// `path` is a canonical module path with the configured extension already
/// appended. Loaders are shared across concurrently running resolution
/// branches, hence the `Send + Sync` bounds; the returned future must be
/// `Send` so branches can run on a multi-threaded runtime.
pub trait SourceLoader: Send + Sync + 'static {
    fn load(&self, path: &str) -> impl Future<Output = Result<String, LoadError>> + Send;
}

// Callers that keep a handle on the loader (tests asserting fetch counts,
// hosts sharing one loader across resolvers) can hand the engine an Arc.
impl<L: SourceLoader> SourceLoader for std::sync::Arc<L> {
    fn load(&self, path: &str) -> impl Future<Output = Result<String, LoadError>> + Send {
        (**self).load(path)
    }
}
