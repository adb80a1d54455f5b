//! Parsing boundary.
//!
//! The Warden grammar lives outside this crate. The resolution engine only
//! needs a collaborator that turns one file's text into a [`SourceUnit`] or
//! rejects it with a located [`ParseError`]; any parser implementing
//! [`UnitParser`] plugs in here.

use std::fmt;

use smol_str::SmolStr;

use crate::ast::SourceUnit;

/// One-based line/column position within a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A file failed to parse.
///
/// Carries the canonical path of the rejected file and, when the parser can
/// produce one, the source location of the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Canonical path of the file that failed to parse
    pub path: SmolStr,
    /// Parser's description of the failure
    pub message: String,
    /// Source location, when available
    pub location: Option<LineCol>,
}

impl ParseError {
    pub fn new(path: impl Into<SmolStr>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Attach a source location.
    pub fn with_location(mut self, location: LineCol) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(loc) => write!(f, "parse error in {} at {}: {}", self.path, loc, self.message),
            None => write!(f, "parse error in {}: {}", self.path, self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parser collaborator: text of one file in, [`SourceUnit`] out.
///
/// Parsing is synchronous; the engine's only suspension points are source
/// fetches. Implementations must be shareable across concurrent resolution
/// branches.
pub trait UnitParser: Send + Sync + 'static {
    fn parse(&self, path: &str, text: &str) -> Result<SourceUnit, ParseError>;
}
