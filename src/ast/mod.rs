//! Data model for parsed Warden source files.
//!
//! A [`SourceUnit`] is the parser's output for one file: the ordered list of
//! import declarations plus three independent symbol namespaces (functions,
//! schemas, path rules). Units are immutable once produced; the resolution
//! engine consumes them, merges their namespaces into the shared table, and
//! discards them.

mod symbols;
mod unit;

pub use symbols::{FunctionDef, PathRuleDef, SchemaDef};
pub use unit::{ImportSpecifier, SourceUnit};

#[cfg(test)]
mod tests;
