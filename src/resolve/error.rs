//! Resolution failure model.
//!
//! Every error is fatal to the enclosing `resolve` call: the engine performs
//! no retries and never exposes a partial table. Cycle suppression is not an
//! error at all; an already-visited path is silently skipped.

use std::fmt;
use std::time::Duration;

use smol_str::SmolStr;
use thiserror::Error;

use crate::parse::ParseError;

/// Chain of importers leading to a module, root entry file first.
///
/// Attached to every resolution error so diagnostics can show how the failing
/// module was reached: `entry -> proj/rules/base -> proj/shared/util`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportChain(Vec<SmolStr>);

impl ImportChain {
    /// Chain containing only the entry file.
    pub fn root(entry: impl Into<SmolStr>) -> Self {
        Self(vec![entry.into()])
    }

    /// Extend the chain with one more importer.
    pub fn child(&self, importer: impl Into<SmolStr>) -> Self {
        let mut chain = self.0.clone();
        chain.push(importer.into());
        Self(chain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImportChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<entry>");
        }
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(path)?;
        }
        Ok(())
    }
}

/// Terminal failure of a `resolve` call.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The loader had no content for a canonical path.
    #[error("module not found: {path} (imported via {chain})")]
    NotFound { path: SmolStr, chain: ImportChain },

    /// The loader failed for a reason other than absence.
    #[error("failed to load {path} (imported via {chain}): {source}")]
    Load {
        path: SmolStr,
        chain: ImportChain,
        #[source]
        source: std::io::Error,
    },

    /// A file's text was rejected by the parser.
    #[error("{source} (imported via {chain})")]
    Parse {
        chain: ImportChain,
        #[source]
        source: ParseError,
    },

    /// A fetch exceeded the configured timeout.
    #[error("timed out loading {path} after {elapsed:?} (imported via {chain})")]
    Timeout {
        path: SmolStr,
        chain: ImportChain,
        elapsed: Duration,
    },

    /// A branch was abandoned because a sibling already failed. Folded away
    /// before the engine returns; callers only see it if they inspect branch
    /// results directly.
    #[error("resolution cancelled before {path} was loaded")]
    Cancelled { path: SmolStr },
}

impl ResolveError {
    /// Canonical path of the module the error is about, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound { path, .. }
            | Self::Load { path, .. }
            | Self::Timeout { path, .. }
            | Self::Cancelled { path } => Some(path),
            Self::Parse { source, .. } => Some(&source.path),
        }
    }

    /// Importer chain leading to the failure, when there is one.
    pub fn chain(&self) -> Option<&ImportChain> {
        match self {
            Self::NotFound { chain, .. }
            | Self::Load { chain, .. }
            | Self::Parse { chain, .. }
            | Self::Timeout { chain, .. } => Some(chain),
            Self::Cancelled { .. } => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
